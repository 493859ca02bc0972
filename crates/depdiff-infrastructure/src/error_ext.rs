//! Error extension utilities
//!
//! Context extension methods that convert foreign errors into domain errors.

use std::fmt;

use depdiff_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use depdiff_infrastructure::error_ext::ErrorContext;
///
/// let text = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read {}", path.display()))?;
///
/// let document: EntityDocument = serde_json::from_str(&text)
///     .input_context(path.display())?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Report a decode failure of the input file named by `file`
    fn input_context<C>(self, file: C) -> Result<T>
    where
        C: fmt::Display,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Io {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn input_context<C>(self, file: C) -> Result<T>
    where
        C: fmt::Display,
        Self: Sized,
    {
        self.map_err(|err| Error::malformed_input(file.to_string(), err.to_string()))
    }
}
