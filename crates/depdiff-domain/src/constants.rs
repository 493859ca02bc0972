//! Domain layer constants
//!
//! Thresholds and schema values that are part of the comparison rules.
//! Infrastructure-specific constants live in `depdiff_infrastructure::constants`.

// ============================================================================
// SCHEMA CONSTANTS
// ============================================================================

/// Schema version written into every canonical document
pub const SCHEMA_VERSION: f64 = 1.0;

/// Sentinel for an unknown line or column
pub const UNKNOWN_POSITION: i64 = -1;

/// Current version of the taxonomy table format
pub const TAXONOMY_VERSION: u32 = 1;

// ============================================================================
// FUZZY MATCHING CONSTANTS
// ============================================================================

/// Similarity ratio at or above which two names are considered equal
pub const FUZZY_EQUAL_THRESHOLD: f64 = 0.95;

/// Similarity ratio at or above which two names may be equal
pub const FUZZY_MAYBE_THRESHOLD: f64 = 0.90;
