//! Comparator Ports
//!
//! An [`EntityComparator`] classifies one `(left, right)` pair. It is selected
//! once per run for a `(left tool, right tool, kind)` combination and must not
//! keep state between calls, which is what allows the entity matcher to split
//! the cross product across workers.
//!
//! A [`NameMatcher`] is the name-level half of a comparator: once the type
//! families of both entities are known to be compatible, it decides from the
//! two qualified names alone.

use std::fmt::Debug;

use crate::entities::Entity;
use crate::value_objects::CompareResult;

/// Pairwise entity classifier
pub trait EntityComparator: Send + Sync + Debug {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Classify `lhs` (left dataset) against `rhs` (right dataset)
    fn compare(&self, lhs: &Entity, rhs: &Entity) -> CompareResult;
}

/// Qualified-name classifier
pub trait NameMatcher: Send + Sync + Debug {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Classify two qualified names
    fn match_names(&self, lhs: &str, rhs: &str) -> CompareResult;
}
