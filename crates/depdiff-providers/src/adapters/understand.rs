//! Understand adapter
//!
//! Only the dependency export is converted. Understand entities come from its
//! own entity export, which already follows the canonical layout.

use std::sync::Arc;

use depdiff_application::registry::{FORMAT_ADAPTERS, FormatAdapterEntry};
use depdiff_domain::entities::{Dependency, DependencyDocument};
use depdiff_domain::error::Result;
use depdiff_domain::ports::{AdapterInput, ConvertedDataset, FormatAdapter};
use depdiff_domain::value_objects::ToolKind;
use serde::Deserialize;

use super::{read_json, require_input};

#[derive(Debug, Deserialize)]
struct UnderstandExport {
    cells: Vec<UnderstandCell>,
}

#[derive(Debug, Deserialize)]
struct UnderstandCell {
    #[serde(default)]
    details: Vec<UnderstandDetail>,
}

#[derive(Debug, Deserialize)]
struct UnderstandDetail {
    #[serde(rename = "type")]
    kind: String,
    src: UnderstandObject,
    dest: UnderstandObject,
}

#[derive(Debug, Deserialize)]
struct UnderstandObject {
    object: i64,
}

/// Adapter for Understand dependency exports
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderstandAdapter;

impl FormatAdapter for UnderstandAdapter {
    fn convert(&self, input: &AdapterInput) -> Result<ConvertedDataset> {
        let path = require_input(input.dependency_input.as_deref(), "understand", "dependency")?;
        let export: UnderstandExport = read_json(path)?;

        let dependencies = export
            .cells
            .into_iter()
            .flat_map(|cell| cell.details)
            .map(|detail| Dependency::new(detail.kind, detail.src.object, detail.dest.object))
            .collect();

        Ok(ConvertedDataset {
            entities: None,
            dependencies: Some(DependencyDocument::new(&input.project_name, dependencies)),
            warnings: Vec::new(),
        })
    }
}

#[linkme::distributed_slice(FORMAT_ADAPTERS)]
static UNDERSTAND_ADAPTER: FormatAdapterEntry = FormatAdapterEntry {
    tool: ToolKind::Understand,
    description: "Understand dependency JSON (cells[].details)",
    factory: || Arc::new(UnderstandAdapter),
};
