//! Replay targets.
//!
//! # Responsibility
//! - Define the capability interface recordings are replayed against.
//! - Keep the rendering surface opaque: no introspection, no validation.
//!
//! # Invariants
//! - Recording code never inspects a context; it only calls and assigns.
//! - Faults raised by a context are propagated unchanged.

pub mod trace;

use crate::capability::canvas::CanvasMethod;
use serde_json::Value;

/// One positional argument handed to a canvas context during replay.
#[derive(Debug)]
pub enum Operand<'a, P> {
    /// Recorded value, passed through as-is.
    Value(&'a Value),
    /// Path object built from an embedded path recording.
    Path(P),
}

impl<'a, P> Operand<'a, P> {
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Path(_) => None,
        }
    }

    pub fn into_path(self) -> Option<P> {
        match self {
            Self::Value(_) => None,
            Self::Path(path) => Some(path),
        }
    }
}

/// A path-building surface, e.g. a `Path2D`.
pub trait PathContext {
    type Error;

    /// Invokes the named method with positional arguments.
    fn call(&mut self, method: &str, arguments: &[Value]) -> Result<(), Self::Error>;

    /// Assigns `value` to the named field.
    fn set(&mut self, property: &str, value: &Value) -> Result<(), Self::Error>;
}

/// A drawing surface, e.g. a 2D rendering context.
pub trait CanvasContext {
    type Error;
    /// Path objects this context accepts as method arguments.
    type Path: PathContext<Error = Self::Error>;

    /// Creates a fresh, empty path object.
    fn create_path(&mut self) -> Result<Self::Path, Self::Error>;

    /// Invokes the named method with positional arguments.
    fn call(
        &mut self,
        method: &str,
        arguments: Vec<Operand<'_, Self::Path>>,
    ) -> Result<(), Self::Error>;

    /// Assigns `value` to the named field.
    fn set(&mut self, property: &str, value: &Value) -> Result<(), Self::Error>;

    /// Pushes the full drawing state.
    fn save(&mut self) -> Result<(), Self::Error> {
        self.call(CanvasMethod::Save.as_str(), Vec::new())
    }

    /// Pops the drawing state pushed by the matching `save`.
    fn restore(&mut self) -> Result<(), Self::Error> {
        self.call(CanvasMethod::Restore.as_str(), Vec::new())
    }
}
