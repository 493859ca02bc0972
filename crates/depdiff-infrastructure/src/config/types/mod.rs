//! Configuration types module

pub mod app;
pub mod logging;
pub mod matcher;
pub mod reconcile;
pub mod taxonomy;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use matcher::MatcherConfig;
pub use reconcile::ReconcileConfig;
pub use taxonomy::TaxonomyConfig;
