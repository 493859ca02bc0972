//! Native Format Adapters
//!
//! One adapter per tool, each turning the tool's own export into canonical
//! entity and dependency documents.
//!
//! | Tool | Entity input | Dependency input |
//! |------|--------------|------------------|
//! | ENRE | JSON `variables` | same file, `cells` |
//! | Understand | none | JSON `cells[].details` |
//! | Depends | text dump `id/name/class` | JSON `cells` |
//! | Sourcetrail | node CSV | edge CSV |

pub mod depends;
pub mod enre;
pub mod sourcetrail;
pub mod understand;

use std::fs;
use std::path::Path;

use depdiff_domain::error::{Error, Result};
use serde::de::DeserializeOwned;

pub use depends::DependsAdapter;
pub use enre::EnreAdapter;
pub use sourcetrail::SourcetrailAdapter;
pub use understand::UnderstandAdapter;

/// Path of a required input, or an error naming the adapter and the input
pub(crate) fn require_input<'a>(
    path: Option<&'a Path>,
    tool: &str,
    what: &str,
) -> Result<&'a Path> {
    path.ok_or_else(|| Error::invalid_argument(format!("The {tool} adapter needs a {what} input")))
}

/// Read a text file
pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::io_with_source(format!("Failed to read {}", path.display()), e))
}

/// Read and decode a JSON file, naming the file on decode failures
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    serde_json::from_str(&text)
        .map_err(|e| Error::malformed_input(path.display().to_string(), e.to_string()))
}
