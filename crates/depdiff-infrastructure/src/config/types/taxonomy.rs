//! Taxonomy source configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the taxonomy tables come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// TOML file replacing the embedded tables
    pub path: Option<PathBuf>,
}
