//! Type Census
//!
//! Histogram of the raw types present in one dataset, with the values its
//! taxonomy table does not recognise.

use std::collections::BTreeMap;

use depdiff_domain::entities::{Dependency, Entity};
use depdiff_domain::value_objects::{TaxonomyTable, ToolKind, UnmappedType};
use tracing::{info, warn};

/// Raw type counts of one dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCensus {
    /// Dataset tag
    pub tool: String,
    /// Records per raw type
    pub counts: BTreeMap<String, usize>,
    /// Raw types without a canonical counterpart
    pub unmapped: Vec<UnmappedType>,
}

impl TypeCensus {
    /// Census of entity types
    pub fn of_entities(tool: ToolKind, table: Option<&TaxonomyTable>, entities: &[Entity]) -> Self {
        let counts = histogram(entities.iter().map(|e| e.entity_type.as_str()));
        Self::build(tool, counts, |raw| {
            table.is_none_or(|t| t.entity_family(raw).is_unmapped())
        })
    }

    /// Census of dependency kinds
    pub fn of_dependencies(
        tool: ToolKind,
        table: Option<&TaxonomyTable>,
        dependencies: &[Dependency],
    ) -> Self {
        let counts = histogram(dependencies.iter().map(|d| d.dependency_type.as_str()));
        Self::build(tool, counts, |raw| {
            table.is_none_or(|t| t.dependency_kind(raw).is_unmapped())
        })
    }

    /// Log the histogram and warn about each unmapped type
    pub fn log(&self) {
        info!(tool = %self.tool, types = ?self.counts, "Type census");
        for unmapped in &self.unmapped {
            warn!(
                tool = %unmapped.tool,
                raw = %unmapped.raw,
                occurrences = unmapped.occurrences,
                "Unmapped type"
            );
        }
    }

    fn build(
        tool: ToolKind,
        counts: BTreeMap<String, usize>,
        is_unmapped: impl Fn(&str) -> bool,
    ) -> Self {
        let unmapped = counts
            .iter()
            .filter(|(raw, _)| is_unmapped(raw))
            .map(|(raw, occurrences)| UnmappedType {
                tool: tool.to_string(),
                raw: raw.clone(),
                occurrences: *occurrences,
            })
            .collect();
        Self {
            tool: tool.to_string(),
            counts,
            unmapped,
        }
    }
}

fn histogram<'a>(values: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}
