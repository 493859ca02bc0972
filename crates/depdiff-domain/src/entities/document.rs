use serde::{Deserialize, Serialize};

use super::{Dependency, Entity};
use crate::constants::SCHEMA_VERSION;

/// Envelope of a canonical entity file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDocument {
    /// Schema version of the document
    pub schema_version: f64,
    /// Name of the analysed project
    pub project_name: String,
    /// Entity records
    pub entity: Vec<Entity>,
}

impl EntityDocument {
    /// Wrap `entity` in a current-version envelope
    pub fn new(project_name: impl Into<String>, entity: Vec<Entity>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            project_name: project_name.into(),
            entity,
        }
    }
}

/// Envelope of a canonical dependency file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyDocument {
    /// Schema version of the document
    pub schema_version: f64,
    /// Name of the analysed project
    pub project_name: String,
    /// Dependency records
    pub dependency: Vec<Dependency>,
}

impl DependencyDocument {
    /// Wrap `dependency` in a current-version envelope
    pub fn new(project_name: impl Into<String>, dependency: Vec<Dependency>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            project_name: project_name.into(),
            dependency,
        }
    }
}
