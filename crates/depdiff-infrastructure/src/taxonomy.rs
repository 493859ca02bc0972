//! Taxonomy data
//!
//! The default tables for all supported tools are compiled into the binary.
//! `taxonomy.path` replaces them wholesale with a user-supplied TOML file of
//! the same shape.

use std::fs;
use std::path::Path;

use depdiff_domain::error::{Error, Result};
use depdiff_domain::value_objects::Taxonomy;
use tracing::info;

use crate::config::TaxonomyConfig;
use crate::error_ext::ErrorContext;

/// Default tables shipped with depdiff
pub const DEFAULT_TAXONOMY: &str = include_str!("../config/taxonomy.toml");

/// Parse and validate taxonomy TOML; `origin` names the source in errors
pub fn parse_taxonomy(text: &str, origin: &str) -> Result<Taxonomy> {
    let taxonomy: Taxonomy = toml::from_str(text).map_err(|e| {
        Error::configuration_with_source(format!("Invalid taxonomy in {origin}: {}", e.message()), e)
    })?;
    taxonomy.validate()?;
    Ok(taxonomy)
}

/// The embedded default taxonomy
pub fn default_taxonomy() -> Result<Taxonomy> {
    parse_taxonomy(DEFAULT_TAXONOMY, "embedded taxonomy")
}

/// Load the taxonomy selected by `config`
pub fn load_taxonomy(config: &TaxonomyConfig) -> Result<Taxonomy> {
    match &config.path {
        Some(path) => load_taxonomy_file(path),
        None => default_taxonomy(),
    }
}

fn load_taxonomy_file(path: &Path) -> Result<Taxonomy> {
    let text = fs::read_to_string(path)
        .io_context(format!("Failed to read taxonomy file {}", path.display()))?;
    let taxonomy = parse_taxonomy(&text, &path.display().to_string())?;
    info!(path = %path.display(), tools = taxonomy.tools.len(), "Taxonomy loaded");
    Ok(taxonomy)
}
