//! ENRE adapter
//!
//! ENRE writes a single JSON file with the entities under `variables` and the
//! relations under `cells`. Project entities come first; the scan stops at
//! the first external one.

use std::collections::BTreeMap;
use std::sync::Arc;

use depdiff_application::registry::{FORMAT_ADAPTERS, FormatAdapterEntry};
use depdiff_domain::entities::{Dependency, DependencyDocument, Entity, EntityDocument};
use depdiff_domain::error::Result;
use depdiff_domain::ports::{AdapterInput, ConvertedDataset, FormatAdapter};
use depdiff_domain::value_objects::ToolKind;
use serde::Deserialize;
use tracing::debug;

use super::{read_json, require_input};

#[derive(Debug, Deserialize)]
struct EnreExport {
    variables: Vec<EnreVariable>,
    #[serde(default)]
    cells: Vec<EnreCell>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnreVariable {
    id: i64,
    qualified_name: String,
    category: String,
    #[serde(default)]
    external: bool,
}

#[derive(Debug, Deserialize)]
struct EnreCell {
    src: i64,
    dest: i64,
    values: BTreeMap<String, serde_json::Value>,
}

/// Adapter for ENRE JSON exports
#[derive(Debug, Clone, Copy, Default)]
pub struct EnreAdapter;

impl FormatAdapter for EnreAdapter {
    fn convert(&self, input: &AdapterInput) -> Result<ConvertedDataset> {
        let path = input
            .entity_input
            .as_deref()
            .or(input.dependency_input.as_deref());
        let export: EnreExport = read_json(require_input(path, "enre", "JSON")?)?;

        let entities: Vec<Entity> = export
            .variables
            .into_iter()
            .take_while(|v| !v.external)
            .map(|v| Entity::new(v.id, v.qualified_name, v.category))
            .collect();

        // One dependency per relation kind recorded on the cell
        let dependencies: Vec<Dependency> = export
            .cells
            .iter()
            .flat_map(|cell| {
                cell.values
                    .keys()
                    .map(|kind| Dependency::new(kind.as_str(), cell.src, cell.dest))
            })
            .collect();

        debug!(
            entities = entities.len(),
            dependencies = dependencies.len(),
            "Converted ENRE export"
        );
        Ok(ConvertedDataset {
            entities: Some(EntityDocument::new(&input.project_name, entities)),
            dependencies: Some(DependencyDocument::new(&input.project_name, dependencies)),
            warnings: Vec::new(),
        })
    }
}

#[linkme::distributed_slice(FORMAT_ADAPTERS)]
static ENRE_ADAPTER: FormatAdapterEntry = FormatAdapterEntry {
    tool: ToolKind::Enre,
    description: "ENRE JSON (variables + cells)",
    factory: || Arc::new(EnreAdapter),
};
