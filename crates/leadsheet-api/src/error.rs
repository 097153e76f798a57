//! Error types for leadsheet-api
//!
//! Every error is rendered as a `{success: false, message}` body. Storage
//! and internal failures get a fixed message; their cause is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use leadsheet_core::response::{INVALID_BODY_MESSAGE, STORAGE_FAILURE_MESSAGE};
use leadsheet_core::ContactResponse;
use thiserror::Error;

/// Result type alias for leadsheet-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in leadsheet-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from leadsheet-core (validation or storage)
    #[error("Core error: {0}")]
    Core(#[from] leadsheet_core::Error),

    /// The request body could not be decoded into a contact payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The blocking store task panicked or was cancelled
    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Listener failure
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Error::Core(leadsheet_core::Error::Validation { message, .. }) => message.clone(),
            Error::InvalidBody(detail) => {
                tracing::debug!(%detail, "Rejected contact body");
                INVALID_BODY_MESSAGE.to_string()
            }
            other => {
                tracing::error!(error = %other, source = ?std::error::Error::source(other), "Error processing form submission");
                STORAGE_FAILURE_MESSAGE.to_string()
            }
        };
        (status, Json(ContactResponse::rejected(message))).into_response()
    }
}
