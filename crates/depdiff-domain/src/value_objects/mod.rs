//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ToolKind`] | Identity of a producing analysis tool |
//! | [`CompareKind`] | Whether a run compares entities or dependencies |
//! | [`CompareResult`] | Outcome of classifying one pair |
//! | [`EntityKey`] | `(entityID, dataset)` identity |
//! | [`Taxonomy`] | Versioned per-tool type and dependency-kind tables |
//! | [`EquivalenceMapping`] | Left-to-right entity ID translation |

/// Comparison outcome and kind
pub mod compare;
/// Entity equivalence mapping
pub mod equivalence;
/// Dataset-qualified entity identity
pub mod key;
/// Type and dependency-kind normalization tables
pub mod taxonomy;
/// Analysis tool identities
pub mod tool;

pub use compare::{CompareKind, CompareResult, FuzzyThresholds};
pub use equivalence::EquivalenceMapping;
pub use key::{EntityKey, PairKey};
pub use taxonomy::{
    DependencyKind, MatchMode, Taxonomy, TaxonomyRule, TaxonomyTable, TypeFamily, TypeLookup,
    UnmappedType,
};
pub use tool::ToolKind;
