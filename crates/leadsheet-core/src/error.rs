//! Error types for Leadsheet core.

use std::path::Path;

/// Errors that can occur while accepting or persisting a submission.
///
/// Variants split into two families: [`Error::Validation`] is caused by the
/// submitter and maps to a 400, everything else is a server-side failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Required submission data was missing or empty.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if a single one is to blame
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// The store could not be read or written.
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable description of the failure
        message: String,
        /// Underlying cause, if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be resolved, parsed, or written.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error outside the store (config files, static assets).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Leadsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error was caused by the client (400) rather than the server (500).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new storage error.
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Error::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new storage error with a source error.
    pub fn storage_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(err: std::io::Error, path: &Path) -> Self {
        Error::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        ))
    }
}
