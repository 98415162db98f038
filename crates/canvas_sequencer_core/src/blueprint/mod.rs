//! Templated drawing recordings.
//!
//! # Responsibility
//! - Record drawing operations whose string arguments may be tags.
//! - Build independent, executable sequences from a value mapping.
//!
//! # Invariants
//! - A blueprint is never executed directly.
//! - Building never mutates the blueprint; values are not retained.
//! - Only top-level string arguments and property values are resolved.

pub mod tag;

use crate::context::CanvasContext;
use crate::error::{SequenceError, SequenceResult};
use crate::model::argument::Argument;
use crate::model::atom::{Atom, CanvasAtom};
use crate::model::wire::SequenceRecord;
use crate::sequence::canvas::CanvasSequence;
use crate::sequence::recorder::{sealed::CanvasSink, CanvasRecorder};
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tag::{TagSyntax, TagValues};

/// A drawing recording with substitution tags, built before use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blueprint {
    sequence: CanvasSequence,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revives a blueprint from the drawing-sequence wire format.
    pub fn from_json(value: &Value) -> SequenceResult<Self> {
        CanvasSequence::from_json(value).map(Self::from)
    }

    pub fn from_json_str(text: &str) -> SequenceResult<Self> {
        CanvasSequence::from_json_str(text).map(Self::from)
    }

    pub fn from_record(record: SequenceRecord) -> SequenceResult<Self> {
        CanvasSequence::from_record(record).map(Self::from)
    }

    pub fn to_record(&self) -> SequenceRecord {
        self.sequence.to_record()
    }

    pub fn to_json(&self) -> Value {
        self.sequence.to_json()
    }

    pub fn to_json_string(&self) -> SequenceResult<String> {
        self.sequence.to_json_string()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn atoms(&self) -> &[CanvasAtom] {
        self.sequence.atoms()
    }

    /// Always fails: a blueprint must be built into a sequence first.
    ///
    /// The context is left untouched.
    pub fn execute<C>(&self, _context: &mut C) -> SequenceResult<()>
    where
        C: CanvasContext + ?Sized,
    {
        warn!("event=blueprint_execute module=blueprint status=rejected");
        Err(SequenceError::BlueprintNotExecutable)
    }

    /// Builds an executable sequence with the default `{`/`}` tag syntax.
    pub fn build<V>(&self, values: &V) -> CanvasSequence
    where
        V: TagValues + ?Sized,
    {
        self.build_with(values, &TagSyntax::default())
    }

    /// Builds an executable sequence with a custom tag syntax.
    ///
    /// A resolved value that is a serialized path record lands in first
    /// position as an embedded path, like any recorded argument.
    pub fn build_with<V>(&self, values: &V, syntax: &TagSyntax) -> CanvasSequence
    where
        V: TagValues + ?Sized,
    {
        let mut built = CanvasSequence::new();
        for atom in self.sequence.atoms() {
            built.push(resolve_atom(atom, values, syntax));
        }
        debug!(
            "event=blueprint_build module=blueprint status=ok atoms={}",
            built.len()
        );
        built
    }
}

fn resolve_atom<V>(atom: &CanvasAtom, values: &V, syntax: &TagSyntax) -> CanvasAtom
where
    V: TagValues + ?Sized,
{
    match atom {
        Atom::Method {
            instruction,
            arguments,
        } => Atom::Method {
            instruction: instruction.clone(),
            arguments: arguments
                .iter()
                .map(|argument| match argument {
                    Argument::Value(Value::String(text)) => {
                        Argument::Value(syntax.resolve(text, values))
                    }
                    other => other.clone(),
                })
                .collect(),
        },
        Atom::Property { instruction, value } => Atom::Property {
            instruction: instruction.clone(),
            value: match value {
                Value::String(text) => syntax.resolve(text, values),
                other => other.clone(),
            },
        },
    }
}

impl From<CanvasSequence> for Blueprint {
    fn from(sequence: CanvasSequence) -> Self {
        Self { sequence }
    }
}

impl CanvasSink for Blueprint {
    fn push_atom(&mut self, atom: CanvasAtom) {
        self.sequence.push(atom);
    }
}

impl CanvasRecorder for Blueprint {}

impl Serialize for Blueprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sequence.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Blueprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        CanvasSequence::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::Blueprint;
    use crate::args;
    use crate::context::trace::TraceContext;
    use crate::error::SequenceError;
    use crate::model::argument::Argument;
    use crate::model::atom::Atom;
    use crate::sequence::path::PathSequence;
    use crate::sequence::recorder::{CanvasRecorder, PathRecorder};
    use serde_json::json;

    #[test]
    fn execute_is_rejected_without_touching_context() {
        let mut blueprint = Blueprint::new();
        blueprint.fill_rect(args![0, 0, 1, 1]);

        let mut ctx = TraceContext::new();
        let err = blueprint.execute(&mut ctx).expect_err("blueprints do not execute");
        assert!(matches!(err, SequenceError::BlueprintNotExecutable));
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn resolves_property_values_and_string_arguments() {
        let mut blueprint = Blueprint::new();
        blueprint.set_fill_style("{color}");
        blueprint.set_line_width(3);
        blueprint.fill_text(args!["{label}", "{x}", 10]);

        let built = blueprint.build(&json!({ "color": "red", "x": 12 }));
        assert_eq!(
            built.to_json()["sequence"],
            json!([
                { "kind": "property", "instruction": "fillStyle", "arguments": ["red"] },
                { "kind": "property", "instruction": "lineWidth", "arguments": [3] },
                { "kind": "method", "instruction": "fillText", "arguments": ["label", 12, 10] }
            ])
        );
    }

    #[test]
    fn embedded_paths_are_not_resolved() {
        let mut path = PathSequence::new();
        path.rect(args!["{x}", 0, 1, 1]);

        let mut blueprint = Blueprint::new();
        blueprint.fill(args![path.clone(), "{rule}"]);

        let built = blueprint.build(&json!({ "x": 9, "rule": "evenodd" }));
        match &built.atoms()[0] {
            Atom::Method { arguments, .. } => {
                assert_eq!(arguments[0], Argument::Path(path));
                assert_eq!(arguments[1], Argument::from("evenodd"));
            }
            other => panic!("unexpected atom {other:?}"),
        }
    }

    #[test]
    fn resolved_path_record_becomes_embedded_path() {
        let mut path = PathSequence::new();
        path.rect(args![1, 2, 3, 4]);

        let mut blueprint = Blueprint::new();
        blueprint.clip(args!["{shape}"]);

        let built = blueprint.build(&json!({ "shape": path.to_json() }));
        let mut ctx = TraceContext::new();
        built.execute(&mut ctx).expect("execute");
        assert_eq!(ctx.paths_created(), 1);
    }

    #[test]
    fn revives_from_sequence_wire_format() {
        let blueprint = Blueprint::from_json(&json!({
            "sequence": [{ "kind": "method", "instruction": "moveTo", "arguments": ["{x}", 1] }]
        }))
        .expect("revive");
        assert_eq!(blueprint.len(), 1);
        assert_eq!(
            blueprint.build(&json!({ "x": 7 })).to_json()["sequence"][0]["arguments"],
            json!([7, 1])
        );
    }
}
