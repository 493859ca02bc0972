//! # depdiff - Provider Implementations
//!
//! Concrete strategies behind the ports declared in `depdiff-domain`. Every
//! comparator and adapter registers itself into the `linkme` slices of
//! `depdiff-application`, so linking this crate is enough to make them
//! resolvable.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Name matching | `NameMatcher` | FilePath, ExactName, FuzzyName, GenericStripping |
//! | Comparators | `EntityComparator` | FamilyDispatch (code2graph, sourcetrail, understand, enre pairs) |
//! | Format adapters | `FormatAdapter` | ENRE, Understand, Depends, Sourcetrail |
//!
//! ## Usage
//!
//! ```ignore
//! // Force linkme registration from a binary or test crate
//! extern crate depdiff_providers;
//! ```

pub use depdiff_domain::error::{Error, Result};
pub use depdiff_domain::ports::{EntityComparator, FormatAdapter, NameMatcher};

/// Provider-specific constants
pub mod constants;

/// Qualified-name matching algorithms
pub mod matchers;

/// Tool-pair entity comparators
///
/// Each comparator is a [`comparators::FamilyDispatchComparator`] configured
/// with the family rules of one `(left tool, right tool)` pair.
pub mod comparators;

/// Native export adapters
pub mod adapters;

pub use comparators::{FamilyDispatchComparator, FamilyRule};
pub use matchers::{
    ExactNameMatcher, FilePathMatcher, FuzzyNameMatcher, GenericStrippingMatcher, TokenOrder,
};
