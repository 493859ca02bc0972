//! Format Adapter Port
//!
//! Adapters turn a tool's native export into canonical documents. They are
//! the only components that know native file layouts.

use std::path::PathBuf;

use crate::entities::{DependencyDocument, EntityDocument};
use crate::error::Result;
use crate::value_objects::TaxonomyTable;

/// Files and metadata handed to an adapter
#[derive(Debug, Clone, Default)]
pub struct AdapterInput {
    /// Native entity export, when the tool has a separate one
    pub entity_input: Option<PathBuf>,
    /// Native dependency export
    pub dependency_input: Option<PathBuf>,
    /// Name written into the produced envelopes
    pub project_name: String,
    /// Taxonomy table of the tool, for native code translation
    pub table: TaxonomyTable,
}

impl AdapterInput {
    /// Create an input for `project_name`
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Set the entity export path
    pub fn with_entity_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.entity_input = Some(path.into());
        self
    }

    /// Set the dependency export path
    pub fn with_dependency_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.dependency_input = Some(path.into());
        self
    }

    /// Set the taxonomy table
    pub fn with_table(mut self, table: TaxonomyTable) -> Self {
        self.table = table;
        self
    }
}

/// Canonical documents produced by an adapter
#[derive(Debug, Clone, Default)]
pub struct ConvertedDataset {
    /// Entity document, absent for tools whose entities come from elsewhere
    pub entities: Option<EntityDocument>,
    /// Dependency document
    pub dependencies: Option<DependencyDocument>,
    /// Records that converted with a degraded value
    pub warnings: Vec<String>,
}

/// Native export normalizer
pub trait FormatAdapter: Send + Sync {
    /// Convert the files named in `input`
    fn convert(&self, input: &AdapterInput) -> Result<ConvertedDataset>;
}
