//! # depdiff Domain Layer
//!
//! Core types for reconciling the output of independent static-analysis tools.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Canonical `Entity` / `Dependency` records and their file envelopes |
//! | [`value_objects`] | Tool identities, comparison outcomes, taxonomy tables, equivalence mapping |
//! | [`ports`] | Comparator, name matcher and format adapter contracts |
//! | [`error`] | Domain error type shared by every layer |
//! | [`constants`] | Thresholds and schema constants |
//!
//! Entity IDs are only comparable inside the dataset that produced them.
//! Every cross-dataset identity goes through [`value_objects::EntityKey`].

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Dependency, DependencyDocument, Entity, EntityDocument};
pub use error::{Error, Result};
pub use value_objects::{
    CompareKind, CompareResult, DependencyKind, EntityKey, EquivalenceMapping, FuzzyThresholds,
    Taxonomy, TaxonomyTable, ToolKind, TypeFamily, TypeLookup, UnmappedType,
};
