//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, MatcherConfig, ReconcileConfig, TaxonomyConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Entity matcher configuration
    pub matcher: MatcherConfig,
    /// Dependency reconciler configuration
    pub reconcile: ReconcileConfig,
    /// Taxonomy source
    pub taxonomy: TaxonomyConfig,
}
