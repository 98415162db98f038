//! Recorded argument values.

use crate::model::wire::is_path_marker;
use crate::sequence::path::PathSequence;
use serde::{Serialize, Serializer};
use serde_json::Value;

const MAX_LOGGED_ERROR_CHARS: usize = 160;

/// Argument of a canvas method atom.
///
/// Only the first argument of a method atom may be a [`Argument::Path`];
/// canvas recordings demote a path in any other position to its serialized
/// form.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Value(Value),
    /// Path sub-recording rebuilt on a fresh path object at replay time.
    Path(PathSequence),
}

impl Argument {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Path(_) => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathSequence> {
        match self {
            Self::Value(_) => None,
            Self::Path(path) => Some(path),
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Promotes a serialized path marker to an embedded path.
    ///
    /// Values that are not well-formed path records stay plain data.
    pub(crate) fn promote_path(self) -> Self {
        match self {
            Self::Value(value) if is_path_marker(&value) => {
                match PathSequence::from_json(&value) {
                    Ok(path) => Self::Path(path),
                    Err(err) => {
                        log::warn!(
                            "event=path_promote module=model status=error error={}",
                            crate::logging::sanitize_message(&err.to_string(), MAX_LOGGED_ERROR_CHARS)
                        );
                        Self::Value(value)
                    }
                }
            }
            other => other,
        }
    }

    /// Replaces an embedded path with its serialized form.
    pub(crate) fn demote_path(self) -> Self {
        match self {
            Self::Path(path) => Self::Value(path.to_json()),
            other => other,
        }
    }
}

/// Conversion between an atom argument type and its wire value.
pub trait AtomArgument: Sized {
    fn from_value(value: Value) -> Self;
    fn to_value(&self) -> Value;
    fn into_value(self) -> Value;
}

impl AtomArgument for Value {
    fn from_value(value: Value) -> Self {
        value
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn into_value(self) -> Value {
        self
    }
}

impl AtomArgument for Argument {
    fn from_value(value: Value) -> Self {
        Self::Value(value)
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Path(path) => path.to_json(),
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            Self::Path(path) => path.to_json(),
        }
    }
}

impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Path(path) => path.serialize(serializer),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<PathSequence> for Argument {
    fn from(path: PathSequence) -> Self {
        Self::Path(path)
    }
}

impl From<&PathSequence> for Argument {
    fn from(path: &PathSequence) -> Self {
        Self::Path(path.clone())
    }
}

macro_rules! argument_from_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

argument_from_json!(&str, String, bool, i32, i64, u32, u64, f32, f64);

/// Builds a `Vec<Argument>` from heterogeneous values.
///
/// ```ignore
/// seq.fill_rect(args![0, 0, "{width}", 40]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Argument::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::{Argument, AtomArgument};
    use crate::sequence::path::PathSequence;
    use crate::sequence::recorder::PathRecorder;
    use serde_json::json;

    #[test]
    fn args_macro_converts_mixed_values() {
        let arguments = args![1, 2.5, "{x}", true];
        assert_eq!(
            arguments,
            vec![
                Argument::Value(json!(1)),
                Argument::Value(json!(2.5)),
                Argument::Value(json!("{x}")),
                Argument::Value(json!(true)),
            ]
        );
        assert!(args![].is_empty());
    }

    #[test]
    fn promotes_well_formed_markers_only() {
        let mut path = PathSequence::new();
        path.rect(args![0, 0, 5, 5]);

        let promoted = Argument::Value(path.to_json()).promote_path();
        assert_eq!(promoted.as_path(), Some(&path));

        let broken = json!({ "isPath": true, "sequence": "nope" });
        let kept = Argument::Value(broken.clone()).promote_path();
        assert_eq!(kept.as_value(), Some(&broken));

        let unmarked = json!({ "sequence": [] });
        assert!(!Argument::Value(unmarked).promote_path().is_path());
    }

    #[test]
    fn path_wire_value_carries_marker() {
        let argument = Argument::from(PathSequence::new());
        assert_eq!(argument.to_value(), json!({ "isPath": true, "sequence": [] }));
        assert_eq!(
            serde_json::to_value(&argument).expect("serialize"),
            argument.to_value()
        );
    }
}
