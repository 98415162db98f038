//! Recording, serialization and replay of 2D drawing-context operations.
//!
//! A [`CanvasSequence`] records calls and property assignments as atoms,
//! round-trips them through JSON and replays them on any [`CanvasContext`].
//! A [`Blueprint`] records the same surface with tag strings and is built
//! into concrete sequences from a value mapping.

pub mod blueprint;
pub mod capability;
pub mod context;
pub mod error;
pub mod logging;
pub mod model;
pub mod sequence;

pub use blueprint::tag::{resolve_tag, TagSyntax, TagValues};
pub use blueprint::Blueprint;
pub use capability::canvas::{CanvasInstruction, CanvasMethod, CanvasProperty};
pub use capability::path::PathMethod;
pub use context::trace::{ContextEvent, TraceArgument, TraceContext, TraceError, TracePath};
pub use context::{CanvasContext, Operand, PathContext};
pub use error::{SequenceError, SequenceResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::argument::Argument;
pub use model::atom::{Atom, AtomKind, CanvasAtom, PathAtom};
pub use model::wire::{AtomRecord, SequenceRecord};
pub use sequence::canvas::CanvasSequence;
pub use sequence::path::PathSequence;
pub use sequence::recorder::{CanvasRecorder, PathRecorder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
