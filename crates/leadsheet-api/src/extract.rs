//! Request body extraction for contact submissions.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use leadsheet_core::ContactRequest;

use crate::Error;

/// A contact payload decoded from a JSON or URL-encoded form body.
///
/// Bodies that are not `application/x-www-form-urlencoded` are decoded as
/// JSON. Any decoding failure becomes [`Error::InvalidBody`].
#[derive(Debug)]
pub struct ContactPayload(pub ContactRequest);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let request = if is_form {
            let Form(body) = Form::<ContactRequest>::from_request(req, state)
                .await
                .map_err(|e| Error::InvalidBody(e.body_text()))?;
            body
        } else {
            let Json(body) = Json::<ContactRequest>::from_request(req, state)
                .await
                .map_err(|e| Error::InvalidBody(e.body_text()))?;
            body
        };
        Ok(ContactPayload(request))
    }
}
