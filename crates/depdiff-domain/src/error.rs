//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for depdiff
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// An input file does not follow the canonical schema
    #[error("Malformed input file {file}: {detail}")]
    MalformedInput {
        /// Path of the offending file
        file: String,
        /// Offending field or key, as reported by the decoder
        detail: String,
    },

    /// No comparator is registered for the requested combination
    #[error(
        "No comparator registered for {left} -> {right} ({kind}). Registered: {}",
        .available.join(", ")
    )]
    UnregisteredComparator {
        /// Left tool name
        left: String,
        /// Right tool name
        right: String,
        /// Comparison kind
        kind: String,
        /// Registered combinations, formatted as `left->right:kind`
        available: Vec<String>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error (with source)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Input error creation methods
impl Error {
    /// Create a malformed input error for `file`
    pub fn malformed_input<F: Into<String>, D: Into<String>>(file: F, detail: D) -> Self {
        Self::MalformedInput {
            file: file.into(),
            detail: detail.into(),
        }
    }

    /// Create an unregistered comparator error
    pub fn unregistered_comparator(
        left: impl Into<String>,
        right: impl Into<String>,
        kind: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::UnregisteredComparator {
            left: left.into(),
            right: right.into(),
            kind: kind.into(),
            available,
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
