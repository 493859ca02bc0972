use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::unknown_position;

/// A directed relation between two entities of the same dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Canonical or tool-local verb (CALL, USE, "Use Partial", ...)
    pub dependency_type: String,
    /// Source entity ID within the producing dataset
    #[serde(rename = "dependencySrcID")]
    pub dependency_src_id: i64,
    /// Destination entity ID within the producing dataset
    #[serde(rename = "dependencyDestID", alias = "dependencydestID")]
    pub dependency_dest_id: i64,
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

impl Dependency {
    /// Create an edge with unknown positions
    pub fn new(dependency_type: impl Into<String>, src: i64, dest: i64) -> Self {
        Self {
            dependency_type: dependency_type.into(),
            dependency_src_id: src,
            dependency_dest_id: dest,
            start_line: unknown_position(),
            start_column: unknown_position(),
            end_line: unknown_position(),
            end_column: unknown_position(),
            dataset: String::new(),
        }
    }

    /// Tag the edge with its producing dataset
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }
}

/// Dependencies of one dataset grouped by source entity ID
///
/// Edge order inside a group follows input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    dataset: String,
    by_source: BTreeMap<i64, Vec<Dependency>>,
}

impl DependencyIndex {
    /// Group `dependencies` by their source ID
    pub fn group_by_source(
        dataset: impl Into<String>,
        dependencies: impl IntoIterator<Item = Dependency>,
    ) -> Self {
        let mut by_source: BTreeMap<i64, Vec<Dependency>> = BTreeMap::new();
        for dep in dependencies {
            by_source.entry(dep.dependency_src_id).or_default().push(dep);
        }
        Self {
            dataset: dataset.into(),
            by_source,
        }
    }

    /// Dataset the edges belong to
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Outgoing edges of `source`, if any
    pub fn outgoing(&self, source: i64) -> Option<&[Dependency]> {
        self.by_source.get(&source).map(Vec::as_slice)
    }

    /// Iterate over `(source, edges)` groups in ascending source order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[Dependency])> {
        self.by_source.iter().map(|(src, deps)| (*src, deps.as_slice()))
    }

    /// Number of distinct sources
    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.by_source.values().map(Vec::len).sum()
    }
}
