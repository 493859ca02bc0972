//! Infrastructure Constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "depdiff.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "depdiff";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DEPDIFF";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "DEPDIFF_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "depdiff";

// ============================================================================
// MATCHER CONSTANTS
// ============================================================================

/// Default number of partitions, `0` meaning one per rayon thread
pub const DEFAULT_PARTITIONS: usize = 0;

// ============================================================================
// OUTPUT CONSTANTS
// ============================================================================

/// Suffix of converted entity documents
pub const ENTITY_FILE_SUFFIX: &str = "entity.json";

/// Suffix of converted dependency documents
pub const DEPENDENCY_FILE_SUFFIX: &str = "dependency.json";
