//! Recorded sequences.
//!
//! # Responsibility
//! - Own ordered, append-only atom lists for both recording flavors.
//! - Replay atoms against a context and round-trip them through JSON.
//!
//! # Invariants
//! - Insertion order is replay order.
//! - Live recording and revival append through the same private push.
//! - A sequence never references another sequence except through an
//!   embedded path argument.

pub mod canvas;
pub mod path;
pub mod recorder;

use crate::error::SequenceResult;
use crate::model::argument::AtomArgument;
use crate::model::atom::Atom;
use crate::model::wire::{AtomRecord, SequenceRecord};

/// Upper bound for instruction names echoed into log lines.
const MAX_LOGGED_INSTRUCTION_CHARS: usize = 64;

/// Converts every serialized atom, stopping at the first malformed one.
fn revive_atoms<A: AtomArgument>(record: SequenceRecord) -> SequenceResult<Vec<Atom<A>>> {
    record
        .sequence
        .into_iter()
        .map(Atom::from_record)
        .collect()
}

fn atom_records<A: AtomArgument>(atoms: &[Atom<A>]) -> Vec<AtomRecord> {
    atoms.iter().map(Atom::to_record).collect()
}

fn logged_instruction(instruction: &str) -> String {
    crate::logging::sanitize_message(instruction, MAX_LOGGED_INSTRUCTION_CHARS)
}
