//! Sending contact payloads to the service.

use async_trait::async_trait;
use leadsheet_core::{ContactRequest, ContactResponse, HealthResponse};

use crate::{Error, Result};

/// Delivers a contact payload and returns the service's structured answer.
///
/// `Ok` means the service answered with a readable body, whatever its
/// `success` flag. `Err` means no usable answer arrived.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Submits one payload.
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse>;
}

/// [`ContactTransport`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Transport for the service at `base_url` (e.g. `http://localhost:3010`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidUrl(base_url));
        }
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// The service root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calls `GET /api/health`.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/health", self.base_url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse> {
        let url = format!("{}/api/contact", self.base_url);
        let response = self.client.post(url).json(request).send().await?;
        tracing::debug!(status = %response.status(), "Contact endpoint answered");
        // Error statuses still carry a structured body.
        Ok(response.json().await?)
    }
}
