use serde::{Deserialize, Serialize};

use super::unknown_position;
use crate::value_objects::EntityKey;

/// A named code element reported by one analysis tool
///
/// `entity_id` is only unique inside `dataset`. Two entities from different
/// datasets are never related by their IDs; use [`Entity::key`] when an
/// identity is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Tool-local identifier
    #[serde(rename = "entityID")]
    pub entity_id: i64,
    /// Qualified name in the tool's own syntax
    pub entity_name: String,
    /// Raw type string from the tool's taxonomy
    pub entity_type: String,
    /// Declaring file, when the tool reports one
    #[serde(default)]
    pub entity_file: Option<String>,
    /// First line, `-1` when unknown
    #[serde(default = "unknown_position")]
    pub start_line: i64,
    /// First column, `-1` when unknown
    #[serde(default = "unknown_position")]
    pub start_column: i64,
    /// Last line, `-1` when unknown
    #[serde(default = "unknown_position")]
    pub end_line: i64,
    /// Last column, `-1` when unknown
    #[serde(default = "unknown_position")]
    pub end_column: i64,
    /// Tag of the producing tool, empty until assigned by a loader
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dataset: String,
}

impl Entity {
    /// Create an entity with unknown file and positions
    pub fn new(
        entity_id: i64,
        entity_name: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Self {
        Self {
            entity_id,
            entity_name: entity_name.into(),
            entity_type: entity_type.into(),
            entity_file: None,
            start_line: unknown_position(),
            start_column: unknown_position(),
            end_line: unknown_position(),
            end_column: unknown_position(),
            dataset: String::new(),
        }
    }

    /// Tag the entity with its producing dataset
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    /// Set the declaring file
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.entity_file = Some(file.into());
        self
    }

    /// Identity used for deduplication across datasets
    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.entity_id, self.dataset.clone())
    }
}
