//! Path-only sequence.

use crate::context::PathContext;
use crate::error::SequenceResult;
use crate::model::atom::PathAtom;
use crate::model::wire::SequenceRecord;
use crate::sequence::recorder::{sealed::PathSink, PathRecorder};
use crate::sequence::{atom_records, logged_instruction, revive_atoms};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An ordered recording of path-building operations.
///
/// Serializes with the `isPath` marker so a canvas recording can tell it
/// apart from plain data. Replay issues no `save`/`restore`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSequence {
    atoms: Vec<PathAtom>,
}

impl PathSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revives a path recording from decoded JSON.
    ///
    /// The `isPath` marker is not required on input.
    pub fn from_json(value: &Value) -> SequenceResult<Self> {
        Self::from_record(SequenceRecord::from_value(value)?)
    }

    pub fn from_json_str(text: &str) -> SequenceResult<Self> {
        Self::from_record(SequenceRecord::from_json_str(text)?)
    }

    pub fn from_record(record: SequenceRecord) -> SequenceResult<Self> {
        let mut sequence = Self::new();
        for atom in revive_atoms::<Value>(record)? {
            sequence.push(atom);
        }
        debug!(
            "event=sequence_revive module=sequence flavor=path status=ok atoms={}",
            sequence.len()
        );
        Ok(sequence)
    }

    /// Replays every atom, in order, on `context`.
    pub fn execute<P>(&self, context: &mut P) -> Result<(), P::Error>
    where
        P: PathContext + ?Sized,
    {
        for atom in &self.atoms {
            trace!(
                "event=atom_execute module=sequence flavor=path kind={} instruction={}",
                atom.kind(),
                logged_instruction(atom.instruction())
            );
            atom.execute(context)?;
        }
        Ok(())
    }

    pub fn to_record(&self) -> SequenceRecord {
        SequenceRecord {
            is_path: true,
            sequence: atom_records(&self.atoms),
        }
    }

    /// Exports `{ "isPath": true, "sequence": [...] }`.
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

    pub fn atoms(&self) -> &[PathAtom] {
        &self.atoms
    }

    pub(crate) fn push(&mut self, atom: PathAtom) {
        self.atoms.push(atom);
    }
}

impl PathSink for PathSequence {
    fn push_atom(&mut self, atom: PathAtom) {
        self.push(atom);
    }
}

impl PathRecorder for PathSequence {}

impl Serialize for PathSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PathSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = SequenceRecord::deserialize(deserializer)?;
        Self::from_record(record).map_err(serde::de::Error::custom)
    }
}
