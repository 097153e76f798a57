//! JSON bodies returned by the HTTP service.

use serde::{Deserialize, Serialize};

/// Confirmation sent after a submission is stored.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Generic message sent when the store fails. The cause is only logged.
pub const STORAGE_FAILURE_MESSAGE: &str =
    "An error occurred while processing your request. Please try again later.";

/// Message sent when the body is not a usable contact payload.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

/// Message reported by the health endpoint.
pub const HEALTH_MESSAGE: &str = "Server is running";

/// Outcome of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the submission was stored
    pub success: bool,
    /// User-facing message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactResponse {
    /// A success response with the standard confirmation.
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    /// A failure response carrying `message`.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "OK" while the process serves requests
    pub status: String,
    /// Human-readable status
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "OK".to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
