//! Canonical records
//!
//! Tool-agnostic shapes that every format adapter produces and every
//! comparison consumes.

/// Dependency edge record and per-source grouping
pub mod dependency;
/// Input/output document envelopes
pub mod document;
/// Code entity record
pub mod entity;

pub use dependency::{Dependency, DependencyIndex};
pub use document::{DependencyDocument, EntityDocument};
pub use entity::Entity;

use crate::constants::UNKNOWN_POSITION;

/// Default for missing position fields
pub(crate) fn unknown_position() -> i64 {
    UNKNOWN_POSITION
}
