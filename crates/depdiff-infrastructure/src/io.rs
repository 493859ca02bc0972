//! Canonical document I/O
//!
//! Loaders tag every record with the dataset of the tool that produced it;
//! that tag is what keeps IDs from different tools apart downstream. Decode
//! failures name the offending file.

use std::fs;
use std::path::Path;

use depdiff_domain::entities::{DependencyDocument, Entity, EntityDocument};
use depdiff_domain::error::Result;
use depdiff_domain::value_objects::{EquivalenceMapping, ToolKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error_ext::ErrorContext;

/// Entity pairs of a previous entity run, as written in its `eq` section
#[derive(Debug, Clone, Deserialize)]
struct EquivalenceFile {
    eq: Vec<(Entity, Entity)>,
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .io_context(format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).input_context(path.display())
}

/// Load a canonical entity document and tag its records with `tool`
pub fn load_entities(path: &Path, tool: ToolKind) -> Result<EntityDocument> {
    let mut document: EntityDocument = read_document(path)?;
    for entity in &mut document.entity {
        entity.dataset = tool.to_string();
    }
    debug!(path = %path.display(), entities = document.entity.len(), "Loaded entities");
    Ok(document)
}

/// Load a canonical dependency document and tag its records with `tool`
pub fn load_dependencies(path: &Path, tool: ToolKind) -> Result<DependencyDocument> {
    let mut document: DependencyDocument = read_document(path)?;
    for dependency in &mut document.dependency {
        dependency.dataset = tool.to_string();
    }
    debug!(
        path = %path.display(),
        dependencies = document.dependency.len(),
        "Loaded dependencies"
    );
    Ok(document)
}

/// Load equal pairs and orient them with `anchor` as the left dataset
pub fn load_equivalence(path: &Path, anchor: ToolKind) -> Result<EquivalenceMapping> {
    let file: EquivalenceFile = read_document(path)?;
    EquivalenceMapping::from_pairs(anchor.as_str(), file.eq.iter().map(|(a, b)| (a, b)))
        .input_context(path.display())
}

/// Write `value` as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .io_context(format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).io_context(format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), "Wrote JSON document");
    Ok(())
}
