//! Recording data model shared by every sequence flavor.
//!
//! # Responsibility
//! - Define the atom sum type and its factory.
//! - Define the argument shapes a canvas recording can hold.
//! - Define the transport records used for JSON serialization and revival.
//!
//! # Invariants
//! - An atom's kind never changes after construction.
//! - Every recorded value is owned by the atom that holds it.

pub mod argument;
pub mod atom;
pub mod wire;
