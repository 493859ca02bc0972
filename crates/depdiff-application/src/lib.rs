//! Application Layer - depdiff
//!
//! Use cases that reconcile two tools' outputs, and the registries through
//! which comparators and format adapters are discovered.
//!
//! ## Use Cases
//!
//! - Entity matching: full cross product through one comparator
//! - Dependency reconciliation: edge projection through an equivalence mapping
//! - Result aggregation: report shapes and summaries
//! - Type census: per-dataset type histograms and unmapped types
//!
//! ## Dependencies
//!
//! This crate depends only on `depdiff-domain` and pure libraries.
//! Implementations of the ports live in `depdiff-providers`.

pub mod ports;
pub mod use_cases;

pub use ports::registry;
pub use use_cases::*;
