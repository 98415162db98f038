//! Transport records for serialized recordings.
//!
//! # Responsibility
//! - Mirror the JSON shape `{ "sequence": [ {kind, instruction, arguments} ] }`.
//! - Carry the `isPath` marker that identifies an embeddable path recording.
//!
//! # Invariants
//! - Serialization always writes the long field names.
//! - Revival also accepts the short legacy names `type`, `inst`, `args`.
//! - `null` input and a missing `sequence` field both revive as empty.

use crate::error::SequenceResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the boolean field marking a serialized path recording.
pub const PATH_MARKER_FIELD: &str = "isPath";

/// Serialized form of one sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceRecord {
    #[serde(rename = "isPath", default, skip_serializing_if = "is_false")]
    pub is_path: bool,
    #[serde(default)]
    pub sequence: Vec<AtomRecord>,
}

/// Serialized form of one atom.
///
/// `kind` stays a plain string here so unknown kinds reach the atom factory
/// and fail there with `InvalidAtomKind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(alias = "inst")]
    pub instruction: String,
    #[serde(alias = "args", default)]
    pub arguments: Vec<Value>,
}

impl SequenceRecord {
    /// Parses a record from an already decoded JSON value.
    ///
    /// # Errors
    /// - `MalformedRecording` when `value` is neither `null` nor an object of
    ///   the recording shape.
    pub fn from_value(value: &Value) -> SequenceResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    /// Parses a record from JSON text.
    pub fn from_json_str(text: &str) -> SequenceResult<Self> {
        let value = serde_json::from_str::<Value>(text)?;
        Self::from_value(&value)
    }

    pub fn to_value(&self) -> Value {
        // Records hold only JSON-safe data.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Returns whether `value` is flagged as a serialized path recording.
pub fn is_path_marker(value: &Value) -> bool {
    value.get(PATH_MARKER_FIELD).and_then(Value::as_bool) == Some(true)
}

fn is_false(value: &bool) -> bool {
    !*value
}
