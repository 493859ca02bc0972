//! Format Adapter Registry
//!
//! Auto-registration of native-export adapters, one per tool.

use std::sync::Arc;

use depdiff_domain::error::{Error, Result};
use depdiff_domain::ports::FormatAdapter;
use depdiff_domain::value_objects::ToolKind;

/// Registry entry for format adapters
pub struct FormatAdapterEntry {
    /// Tool whose exports the adapter reads
    pub tool: ToolKind,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the adapter
    pub factory: fn() -> Arc<dyn FormatAdapter>,
}

#[linkme::distributed_slice]
pub static FORMAT_ADAPTERS: [FormatAdapterEntry] = [..];

/// Resolve the adapter registered for `tool`
pub fn resolve_format_adapter(tool: ToolKind) -> Result<Arc<dyn FormatAdapter>> {
    FORMAT_ADAPTERS
        .iter()
        .find(|entry| entry.tool == tool)
        .map(|entry| (entry.factory)())
        .ok_or_else(|| {
            let available: Vec<&str> = FORMAT_ADAPTERS.iter().map(|e| e.tool.as_str()).collect();
            Error::configuration(format!(
                "No format adapter registered for '{tool}'. Available adapters: {available:?}"
            ))
        })
}

/// List all registered adapters as `(tool, description)`
pub fn list_format_adapters() -> Vec<(ToolKind, &'static str)> {
    let mut entries: Vec<(ToolKind, &'static str)> = FORMAT_ADAPTERS
        .iter()
        .map(|entry| (entry.tool, entry.description))
        .collect();
    entries.sort_by_key(|(tool, _)| *tool);
    entries
}
