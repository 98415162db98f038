//! Drawing-flavor sequence.

use crate::context::CanvasContext;
use crate::error::SequenceResult;
use crate::model::argument::Argument;
use crate::model::atom::{Atom, CanvasAtom};
use crate::model::wire::SequenceRecord;
use crate::sequence::recorder::{sealed::CanvasSink, CanvasRecorder};
use crate::sequence::{atom_records, logged_instruction, revive_atoms};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An ordered recording of drawing-context operations.
///
/// Replay is bracketed by one `save` before the first atom and one `restore`
/// after the last, so a sequence never leaks state into the caller's
/// context. A method whose first argument is an embedded [`PathSequence`]
/// receives a freshly built path object in its place.
///
/// [`PathSequence`]: crate::PathSequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasSequence {
    atoms: Vec<CanvasAtom>,
}

impl CanvasSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revives a sequence from decoded JSON.
    ///
    /// `null` and a missing `sequence` field revive an empty sequence.
    ///
    /// # Errors
    /// - `MalformedRecording` when the value does not have the recording shape.
    /// - `InvalidAtomKind` / `MissingPropertyValue` for a broken atom.
    pub fn from_json(value: &Value) -> SequenceResult<Self> {
        Self::from_record(SequenceRecord::from_value(value)?)
    }

    /// Revives a sequence from JSON text.
    pub fn from_json_str(text: &str) -> SequenceResult<Self> {
        Self::from_record(SequenceRecord::from_json_str(text)?)
    }

    /// Revives a sequence from its transport record.
    pub fn from_record(record: SequenceRecord) -> SequenceResult<Self> {
        let mut sequence = Self::new();
        for atom in revive_atoms::<Argument>(record)? {
            sequence.push(atom);
        }
        debug!(
            "event=sequence_revive module=sequence flavor=canvas status=ok atoms={}",
            sequence.len()
        );
        Ok(sequence)
    }

    /// Replays every atom, in order, inside a `save`/`restore` bracket.
    ///
    /// The first context fault stops the replay and is returned unchanged;
    /// the closing `restore` is not issued in that case.
    pub fn execute<C>(&self, context: &mut C) -> Result<(), C::Error>
    where
        C: CanvasContext + ?Sized,
    {
        debug!(
            "event=sequence_execute module=sequence flavor=canvas status=start atoms={}",
            self.atoms.len()
        );
        context.save()?;
        for atom in &self.atoms {
            trace!(
                "event=atom_execute module=sequence kind={} instruction={}",
                atom.kind(),
                logged_instruction(atom.instruction())
            );
            atom.execute(context)?;
        }
        context.restore()?;
        debug!("event=sequence_execute module=sequence flavor=canvas status=ok");
        Ok(())
    }

    /// Exports the transport record.
    pub fn to_record(&self) -> SequenceRecord {
        SequenceRecord {
            is_path: false,
            sequence: atom_records(&self.atoms),
        }
    }

    /// Exports `{ "sequence": [...] }`, ready for transmission.
    pub fn to_json(&self) -> Value {
        self.to_record().to_value()
    }

    pub fn to_json_string(&self) -> SequenceResult<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[CanvasAtom] {
        &self.atoms
    }

    /// Appends an atom, applying the embedded-path rule.
    ///
    /// A serialized path marker in first position becomes an embedded path;
    /// an embedded path in any other position is stored serialized.
    pub(crate) fn push(&mut self, atom: CanvasAtom) {
        let atom = match atom {
            Atom::Method {
                instruction,
                arguments,
            } => Atom::Method {
                instruction,
                arguments: arguments
                    .into_iter()
                    .enumerate()
                    .map(|(index, argument)| {
                        if index == 0 {
                            argument.promote_path()
                        } else {
                            argument.demote_path()
                        }
                    })
                    .collect(),
            },
            property => property,
        };
        self.atoms.push(atom);
    }
}

impl CanvasSink for CanvasSequence {
    fn push_atom(&mut self, atom: CanvasAtom) {
        self.push(atom);
    }
}

impl CanvasRecorder for CanvasSequence {}

impl Serialize for CanvasSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CanvasSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = SequenceRecord::deserialize(deserializer)?;
        Self::from_record(record).map_err(serde::de::Error::custom)
    }
}
