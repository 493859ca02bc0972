//! Depends adapter
//!
//! Entities come from a text dump with one `id/name/qualified.ClassEntity`
//! line per entity. Dependencies come from the JSON matrix, one record per
//! relation kind of each cell.

use std::collections::BTreeMap;
use std::sync::Arc;

use depdiff_application::registry::{FORMAT_ADAPTERS, FormatAdapterEntry};
use depdiff_domain::entities::{Dependency, DependencyDocument, Entity, EntityDocument};
use depdiff_domain::error::{Error, Result};
use depdiff_domain::ports::{AdapterInput, ConvertedDataset, FormatAdapter};
use depdiff_domain::value_objects::ToolKind;
use serde::Deserialize;

use super::{read_json, read_text, require_input};
use crate::constants::{DEPENDS_ENTITY_SUFFIX, DEPENDS_FIELD_SEPARATOR};

#[derive(Debug, Deserialize)]
struct DependsMatrix {
    cells: Vec<DependsCell>,
}

#[derive(Debug, Deserialize)]
struct DependsCell {
    src: i64,
    dest: i64,
    values: BTreeMap<String, serde_json::Value>,
}

/// Parse one line of the entity dump
///
/// Returns `None` for lines without the three fields. Names may contain the
/// separator themselves, so the ID is the first field and the class the last.
pub fn parse_entity_line(line: &str) -> Option<(&str, &str, String)> {
    let (id, rest) = line.split_once(DEPENDS_FIELD_SEPARATOR)?;
    let (name, class) = rest.rsplit_once(DEPENDS_FIELD_SEPARATOR)?;
    let simple = class.rsplit('.').next().unwrap_or(class);
    Some((id.trim(), name, simple.replace(DEPENDS_ENTITY_SUFFIX, "")))
}

/// Adapter for Depends exports
#[derive(Debug, Clone, Copy, Default)]
pub struct DependsAdapter;

impl DependsAdapter {
    fn entities(path: &std::path::Path, warnings: &mut Vec<String>) -> Result<Vec<Entity>> {
        let text = read_text(path)?;
        let mut entities = Vec::new();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((id, name, kind)) = parse_entity_line(line) else {
                warnings.push(format!("{}:{}: skipped line without three fields", path.display(), number + 1));
                continue;
            };
            let id = id.parse::<i64>().map_err(|e| {
                Error::malformed_input(
                    path.display().to_string(),
                    format!("line {}: invalid entity id '{id}': {e}", number + 1),
                )
            })?;
            entities.push(Entity::new(id, name, kind));
        }
        Ok(entities)
    }
}

impl FormatAdapter for DependsAdapter {
    fn convert(&self, input: &AdapterInput) -> Result<ConvertedDataset> {
        let entity_path = require_input(input.entity_input.as_deref(), "depends", "entity")?;
        let dependency_path =
            require_input(input.dependency_input.as_deref(), "depends", "dependency")?;

        let mut warnings = Vec::new();
        let entities = Self::entities(entity_path, &mut warnings)?;

        let matrix: DependsMatrix = read_json(dependency_path)?;
        let dependencies = matrix
            .cells
            .iter()
            .flat_map(|cell| {
                cell.values
                    .keys()
                    .map(|kind| Dependency::new(kind.as_str(), cell.src, cell.dest))
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
static DEPENDS_ADAPTER: FormatAdapterEntry = FormatAdapterEntry {
    tool: ToolKind::Depends,
    description: "Depends entity dump (id/name/class) + dependency JSON",
    factory: || Arc::new(DependsAdapter),
};
