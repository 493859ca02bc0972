//! Use cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`entity_matcher`] | Cross-product entity classification |
//! | [`dependency_reconciler`] | Edge projection through an equivalence mapping |
//! | [`aggregator`] | Output documents and summaries |
//! | [`census`] | Raw type histograms and unmapped types |

pub mod aggregator;
pub mod census;
pub mod dependency_reconciler;
pub mod entity_matcher;

pub use aggregator::{ComparisonReport, ComparisonSummary};
pub use census::TypeCensus;
pub use dependency_reconciler::{
    DependencyMatchOutcome, DependencyReconciler, ReconcileOptions, ReconcileStats,
};
pub use entity_matcher::{EntityMatchOutcome, EntityMatcher, MatchSets, MatcherOptions};
