//! Comparator Registry
//!
//! Auto-registration of entity comparators keyed by
//! `(left tool, right tool, comparison kind)`.

use std::sync::Arc;

use depdiff_domain::error::{Error, Result};
use depdiff_domain::ports::EntityComparator;
use depdiff_domain::value_objects::{CompareKind, FuzzyThresholds, Taxonomy, ToolKind};

/// Configuration handed to comparator factories
#[derive(Debug, Clone)]
pub struct ComparatorConfig {
    /// Tool that produced the left dataset
    pub left: ToolKind,
    /// Tool that produced the right dataset
    pub right: ToolKind,
    /// Normalization tables for both tools
    pub taxonomy: Arc<Taxonomy>,
    /// Fuzzy name thresholds
    pub fuzzy: FuzzyThresholds,
}

impl ComparatorConfig {
    /// Create a config with default thresholds
    pub fn new(left: ToolKind, right: ToolKind, taxonomy: Arc<Taxonomy>) -> Self {
        Self {
            left,
            right,
            taxonomy,
            fuzzy: FuzzyThresholds::default(),
        }
    }

    /// Override the fuzzy thresholds
    pub fn with_fuzzy(mut self, fuzzy: FuzzyThresholds) -> Self {
        self.fuzzy = fuzzy;
        self
    }
}

/// Registry entry for entity comparators
pub struct ComparatorEntry {
    /// Tool on the left side
    pub left: ToolKind,
    /// Tool on the right side
    pub right: ToolKind,
    /// Comparison kind served
    pub kind: CompareKind,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the comparator
    pub factory: fn(&ComparatorConfig) -> std::result::Result<Arc<dyn EntityComparator>, String>,
}

impl ComparatorEntry {
    /// `left->right:kind` label
    pub fn label(&self) -> String {
        format!("{}->{}:{}", self.left, self.right, self.kind)
    }

    fn serves(&self, left: ToolKind, right: ToolKind, kind: CompareKind) -> bool {
        self.left == left && self.right == right && self.kind == kind
    }
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static COMPARATORS: [ComparatorEntry] = [..];

/// Resolve the comparator registered for `config.left`, `config.right` and `kind`
///
/// Never falls back to a default comparator: an unknown combination is a
/// configuration error naming the combination and listing the registered ones.
pub fn resolve_comparator(
    config: &ComparatorConfig,
    kind: CompareKind,
) -> Result<Arc<dyn EntityComparator>> {
    let entry = COMPARATORS
        .iter()
        .find(|entry| entry.serves(config.left, config.right, kind))
        .ok_or_else(|| {
            let mut available: Vec<String> = COMPARATORS.iter().map(ComparatorEntry::label).collect();
            available.sort();
            Error::unregistered_comparator(
                config.left.as_str(),
                config.right.as_str(),
                kind.as_str(),
                available,
            )
        })?;

    (entry.factory)(config).map_err(|message| {
        Error::configuration(format!(
            "Failed to build comparator {}: {message}",
            entry.label()
        ))
    })
}

/// List all registered comparators as `(label, description)`, sorted by label
pub fn list_comparators() -> Vec<(String, &'static str)> {
    let mut entries: Vec<(String, &'static str)> = COMPARATORS
        .iter()
        .map(|entry| (entry.label(), entry.description))
        .collect();
    entries.sort();
    entries
}
