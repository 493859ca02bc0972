//! Sourcetrail adapter
//!
//! Sourcetrail database dumps are two CSV tables. Node and edge types are
//! numeric codes, translated through the code tables of the Sourcetrail
//! taxonomy. Unknown codes keep the raw number as their type so the census
//! reports them, and each one adds a warning.

use std::path::Path;
use std::sync::Arc;

use depdiff_application::registry::{FORMAT_ADAPTERS, FormatAdapterEntry};
use depdiff_domain::entities::{Dependency, DependencyDocument, Entity, EntityDocument};
use depdiff_domain::error::{Error, Result};
use depdiff_domain::ports::{AdapterInput, ConvertedDataset, FormatAdapter};
use depdiff_domain::value_objects::ToolKind;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::require_input;
use crate::constants::SOURCETRAIL_NAME_MARKERS;

#[derive(Debug, Deserialize)]
struct NodeRow {
    id: i64,
    #[serde(rename = "type")]
    code: String,
    serialized_name: String,
}

#[derive(Debug, Deserialize)]
struct EdgeRow {
    #[serde(rename = "type")]
    code: String,
    source_node_id: i64,
    target_node_id: i64,
}

/// Strip Sourcetrail serialization markers from a node name
pub fn clean_name(serialized: &str) -> String {
    SOURCETRAIL_NAME_MARKERS
        .iter()
        .fold(serialized.to_string(), |name, (marker, replacement)| {
            name.replace(marker, replacement)
        })
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::io_with_source(format!("Failed to open {}", path.display()), e)
    })?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|e| Error::malformed_input(path.display().to_string(), e.to_string()))
}

/// Adapter for Sourcetrail node/edge CSV dumps
#[derive(Debug, Clone, Copy, Default)]
pub struct SourcetrailAdapter;

impl FormatAdapter for SourcetrailAdapter {
    fn convert(&self, input: &AdapterInput) -> Result<ConvertedDataset> {
        let node_path = require_input(input.entity_input.as_deref(), "sourcetrail", "node CSV")?;
        let edge_path =
            require_input(input.dependency_input.as_deref(), "sourcetrail", "edge CSV")?;
        let mut warnings = Vec::new();

        let nodes: Vec<NodeRow> = read_rows(node_path)?;
        let entities = nodes
            .into_iter()
            .map(|row| {
                let name = clean_name(&row.serialized_name);
                let kind = match input.table.entity_code(&row.code) {
                    Some(kind) => kind.to_string(),
                    None => {
                        warn!(code = %row.code, name = %name, "Unknown Sourcetrail node type");
                        warnings.push(format!("node {}: unknown type code {}", row.id, row.code));
                        row.code
                    }
                };
                Entity::new(row.id, name, kind)
            })
            .collect();

        let edges: Vec<EdgeRow> = read_rows(edge_path)?;
        let dependencies = edges
            .into_iter()
            .map(|row| {
                let kind = match input.table.dependency_code(&row.code) {
                    Some(kind) => kind.to_string(),
                    None => {
                        warn!(code = %row.code, "Unknown Sourcetrail edge type");
                        warnings.push(format!(
                            "edge {}->{}: unknown type code {}",
                            row.source_node_id, row.target_node_id, row.code
                        ));
                        row.code
                    }
                };
                Dependency::new(kind, row.source_node_id, row.target_node_id)
            })
            .collect();

        Ok(ConvertedDataset {
            entities: Some(EntityDocument::new(&input.project_name, entities)),
            dependencies: Some(DependencyDocument::new(&input.project_name, dependencies)),
            warnings,
        })
    }
}

#[linkme::distributed_slice(FORMAT_ADAPTERS)]
static SOURCETRAIL_ADAPTER: FormatAdapterEntry = FormatAdapterEntry {
    tool: ToolKind::Sourcetrail,
    description: "Sourcetrail node/edge CSV with numeric type codes",
    factory: || Arc::new(SourcetrailAdapter),
};
