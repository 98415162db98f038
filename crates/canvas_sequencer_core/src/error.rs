//! Crate-wide error type for recording, revival and build operations.
//!
//! # Responsibility
//! - Describe every failure the sequencer itself can raise.
//! - Keep context faults out: replay returns the context's own error type.

use thiserror::Error;

pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors raised by sequences, blueprints and the tag resolver.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Atom factory received a kind other than `method` or `property`.
    #[error("invalid atom kind `{0}`; expected method|property")]
    InvalidAtomKind(String),

    /// Property atom was constructed without a value to assign.
    #[error("property atom `{0}` requires a value")]
    MissingPropertyValue(String),

    /// Name is not part of the recording surface of this sequence flavor.
    #[error("`{instruction}` is not part of the {surface} recording surface")]
    UnknownInstruction {
        surface: &'static str,
        instruction: String,
    },

    /// A recording cannot yield live values.
    #[error("invalid canvas sequencer interaction, cannot get {0}")]
    WriteOnlyProperty(String),

    #[error("cannot execute a blueprint; build it into a sequence first")]
    BlueprintNotExecutable,

    /// Serialized input does not have the recording shape.
    #[error("malformed recording: {0}")]
    MalformedRecording(#[from] serde_json::Error),

    #[error("invalid tag syntax: {0}")]
    InvalidTagSyntax(String),
}

impl SequenceError {
    /// Returns `true` for errors caused by misusing the recording API.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::WriteOnlyProperty(_) | Self::BlueprintNotExecutable | Self::UnknownInstruction { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceError;

    #[test]
    fn write_only_message_names_the_property() {
        let err = SequenceError::WriteOnlyProperty("fillStyle".to_string());
        assert_eq!(
            err.to_string(),
            "invalid canvas sequencer interaction, cannot get fillStyle"
        );
        assert!(err.is_usage_error());
    }

    #[test]
    fn malformed_recording_wraps_serde_errors() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SequenceError::from(source);
        assert!(matches!(err, SequenceError::MalformedRecording(_)));
        assert!(!err.is_usage_error());
    }
}
