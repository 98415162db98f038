//! Atom domain model.
//!
//! # Responsibility
//! - Represent one recorded operation: a method call or a property assignment.
//! - Dispatch construction on the atom kind through a single factory.
//! - Replay one atom against a context.
//!
//! # Invariants
//! - `Atom::Property` always carries exactly one value.
//! - Executing an atom issues exactly one call or assignment on the context.
//! - Context faults are returned unchanged.

use crate::context::{CanvasContext, Operand, PathContext};
use crate::error::{SequenceError, SequenceResult};
use crate::model::argument::{Argument, AtomArgument};
use crate::model::wire::AtomRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Wire value for method atoms.
pub const ATOM_KIND_METHOD: &str = "method";
/// Wire value for property atoms.
pub const ATOM_KIND_PROPERTY: &str = "property";

/// The two shapes an atom can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomKind {
    /// Invoke a named callable with positional arguments.
    Method,
    /// Assign a single value to a named field.
    Property,
}

impl AtomKind {
    /// Stable string id used in the serialized `kind` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method => ATOM_KIND_METHOD,
            Self::Property => ATOM_KIND_PROPERTY,
        }
    }
}

impl Display for AtomKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomKind {
    type Err = SequenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ATOM_KIND_METHOD => Ok(Self::Method),
            ATOM_KIND_PROPERTY => Ok(Self::Property),
            other => Err(SequenceError::InvalidAtomKind(other.to_string())),
        }
    }
}

/// One recorded operation.
///
/// `A` is the argument type of method atoms: [`Argument`] for canvas
/// recordings (which may embed a path), plain [`Value`] for path recordings.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom<A> {
    Method {
        instruction: String,
        arguments: Vec<A>,
    },
    Property {
        instruction: String,
        value: Value,
    },
}

/// Atom stored by a canvas recording.
pub type CanvasAtom = Atom<Argument>;
/// Atom stored by a path recording.
pub type PathAtom = Atom<Value>;

impl<A: AtomArgument> Atom<A> {
    /// Creates a method atom.
    pub fn method(instruction: impl Into<String>, arguments: Vec<A>) -> Self {
        Self::Method {
            instruction: instruction.into(),
            arguments,
        }
    }

    /// Creates a property atom.
    pub fn property(instruction: impl Into<String>, value: Value) -> Self {
        Self::Property {
            instruction: instruction.into(),
            value,
        }
    }

    /// Creates an atom of the requested kind.
    ///
    /// Property atoms keep only the first argument as the assigned value.
    ///
    /// # Errors
    /// - `MissingPropertyValue` when a property atom receives no argument.
    pub fn from_parts(
        kind: AtomKind,
        instruction: impl Into<String>,
        arguments: Vec<A>,
    ) -> SequenceResult<Self> {
        let instruction = instruction.into();
        match kind {
            AtomKind::Method => Ok(Self::Method {
                instruction,
                arguments,
            }),
            AtomKind::Property => match arguments.into_iter().next() {
                Some(value) => Ok(Self::Property {
                    instruction,
                    value: value.into_value(),
                }),
                None => Err(SequenceError::MissingPropertyValue(instruction)),
            },
        }
    }

    /// Creates an atom from a serialized record.
    ///
    /// # Errors
    /// - `InvalidAtomKind` when the record's kind is not `method|property`.
    /// - `MissingPropertyValue` when a property record has no arguments.
    pub fn from_record(record: AtomRecord) -> SequenceResult<Self> {
        let kind = record.kind.parse::<AtomKind>()?;
        let arguments = record.arguments.into_iter().map(A::from_value).collect();
        Self::from_parts(kind, record.instruction, arguments)
    }

    pub fn kind(&self) -> AtomKind {
        match self {
            Self::Method { .. } => AtomKind::Method,
            Self::Property { .. } => AtomKind::Property,
        }
    }

    pub fn instruction(&self) -> &str {
        match self {
            Self::Method { instruction, .. } | Self::Property { instruction, .. } => instruction,
        }
    }

    /// Exports the atom in transport form.
    pub fn to_record(&self) -> AtomRecord {
        let arguments = match self {
            Self::Method { arguments, .. } => arguments.iter().map(A::to_value).collect(),
            Self::Property { value, .. } => vec![value.clone()],
        };
        AtomRecord {
            kind: self.kind().as_str().to_string(),
            instruction: self.instruction().to_string(),
            arguments,
        }
    }
}

impl PathAtom {
    /// Replays this atom on a path-building context.
    pub fn execute<P>(&self, context: &mut P) -> Result<(), P::Error>
    where
        P: PathContext + ?Sized,
    {
        match self {
            Self::Method {
                instruction,
                arguments,
            } => context.call(instruction, arguments),
            Self::Property { instruction, value } => context.set(instruction, value),
        }
    }
}

impl CanvasAtom {
    /// Replays this atom on a drawing context.
    ///
    /// Embedded paths are rebuilt on a fresh path object from the context and
    /// handed over in place of their serialized form.
    pub fn execute<C>(&self, context: &mut C) -> Result<(), C::Error>
    where
        C: CanvasContext + ?Sized,
    {
        match self {
            Self::Method {
                instruction,
                arguments,
            } => {
                let mut operands = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    let operand = match argument {
                        Argument::Value(value) => Operand::Value(value),
                        Argument::Path(path) => {
                            let mut target = context.create_path()?;
                            path.execute(&mut target)?;
                            Operand::Path(target)
                        }
                    };
                    operands.push(operand);
                }
                context.call(instruction, operands)
            }
            Self::Property { instruction, value } => context.set(instruction, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AtomKind, PathAtom};
    use crate::error::SequenceError;
    use crate::model::wire::AtomRecord;
    use serde_json::{json, Value};

    #[test]
    fn parses_known_kinds_only() {
        assert_eq!("method".parse::<AtomKind>().expect("method"), AtomKind::Method);
        assert_eq!(
            "property".parse::<AtomKind>().expect("property"),
            AtomKind::Property
        );

        let err = "Method".parse::<AtomKind>().expect_err("case-sensitive kind");
        assert!(matches!(err, SequenceError::InvalidAtomKind(kind) if kind == "Method"));
    }

    #[test]
    fn property_factory_keeps_first_argument() {
        let atom = PathAtom::from_parts(
            AtomKind::Property,
            "lineWidth",
            vec![json!(2), json!(9)],
        )
        .expect("property atom");
        assert_eq!(atom, PathAtom::property("lineWidth", json!(2)));
    }

    #[test]
    fn property_factory_rejects_missing_value() {
        let err = PathAtom::from_parts(AtomKind::Property, "font", Vec::<Value>::new())
            .expect_err("value is required");
        assert!(matches!(err, SequenceError::MissingPropertyValue(name) if name == "font"));
    }

    #[test]
    fn record_roundtrip_keeps_kind_and_arguments() {
        let atom = PathAtom::method("rect", vec![json!(1), json!(2), json!(3), json!(4)]);
        let record = atom.to_record();
        assert_eq!(record.kind, "method");
        assert_eq!(record.arguments.len(), 4);
        assert_eq!(PathAtom::from_record(record).expect("revive"), atom);
    }

    #[test]
    fn record_with_unknown_kind_is_rejected() {
        let record = AtomRecord {
            kind: "macro".to_string(),
            instruction: "rect".to_string(),
            arguments: vec![],
        };
        let err = PathAtom::from_record(record).expect_err("unknown kind");
        assert!(matches!(err, SequenceError::InvalidAtomKind(_)));
    }
}
