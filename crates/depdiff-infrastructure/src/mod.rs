//! # Infrastructure Layer
//!
//! Technical concerns around the comparison engine: configuration, logging,
//! the shipped taxonomy, canonical file I/O and the run orchestration that
//! ties them to the use cases.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//! | [`taxonomy`] | Embedded default taxonomy and file override |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Runs
//! | Module | Description |
//! |--------|-------------|
//! | [`io`] | Canonical document loading and report writing |
//! | [`runner`] | `compare` and `format` orchestration |

// Force-link depdiff-providers so its linkme registrations are included
extern crate depdiff_providers;

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod io;
pub mod logging;
pub mod runner;
pub mod taxonomy;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use runner::{CompareRequest, ComparisonRunner, FormatOutcome, FormatRequest};
