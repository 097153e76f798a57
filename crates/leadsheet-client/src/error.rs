//! Error types for leadsheet-client

use thiserror::Error;

/// Result type alias for leadsheet-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the service
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP client error: connection refused, timeout, or an unreadable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service could not be reached.
    ///
    /// [`HttpTransport`](crate::HttpTransport) reports through [`Error::Http`];
    /// this variant is for other [`ContactTransport`](crate::ContactTransport)
    /// implementations, such as a browser `fetch` binding, that have no
    /// reqwest error to carry.
    #[error("Service unreachable: {0}")]
    Unreachable(String),

    /// The configured base URL is unusable
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}
