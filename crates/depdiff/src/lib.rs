//! # depdiff
//!
//! Reconciles what two static-analysis tools report about the same code base.
//!
//! Each tool's native export is first converted into a canonical entity and
//! dependency document (`depdiff format`). Two canonical datasets can then be
//! compared (`depdiff compare`):
//!
//! - **entity** runs classify every cross pair as `eq`, `maybe_eq` or `ne`
//!   through the comparator registered for the tool pair;
//! - **dependency** runs project the left edges through the `eq` pairs of an
//!   entity run and report the edges both tools agree on.
//!
//! ## Example
//!
//! ```ignore
//! use depdiff::infrastructure::{AppConfig, CompareRequest, ComparisonRunner};
//! use depdiff::domain::{CompareKind, ToolKind};
//!
//! let runner = ComparisonRunner::new(AppConfig::default())?;
//! let summary = runner.compare(&CompareRequest {
//!     left_tool: ToolKind::Enre,
//!     left: "enre_demo_entity.json".into(),
//!     right_tool: ToolKind::Depends,
//!     right: "depends_demo_entity.json".into(),
//!     kind: CompareKind::Entity,
//!     output: "entity_report.json".into(),
//!     equivalence: None,
//! })?;
//! println!("{summary}");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - canonical records, taxonomy tables, ports and errors
//! - `application` - entity matcher, dependency reconciler, registries
//! - `infrastructure` - configuration, logging, file I/O, run orchestration

/// Domain layer - canonical records and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use depdiff_domain::*;
}

/// Application layer - use cases and registries
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use depdiff_application::*;
}

/// Infrastructure layer - config, logging and the runner
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use depdiff_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the run entry points at the crate root
pub use infrastructure::{CompareRequest, ComparisonRunner, FormatRequest};
