//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `DEPDIFF_*` environment variables, in that order.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, MatcherConfig, ReconcileConfig, TaxonomyConfig};
