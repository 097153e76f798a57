//! API routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use leadsheet_core::{ContactResponse, HealthResponse};
use tracing::info;

use crate::extract::ContactPayload;
use crate::state::AppState;
use crate::Result;

/// Routes under `/api`, bound to `state`.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .route("/api/health", get(health))
        .with_state(state)
}

/// `POST /api/contact`: validate, stamp, and append one submission.
async fn submit_contact(
    State(state): State<AppState>,
    ContactPayload(request): ContactPayload,
) -> Result<Json<ContactResponse>> {
    let submission = request.into_submission(state.validation, Utc::now())?;
    let store = Arc::clone(&state.store);
    let rows = tokio::task::spawn_blocking(move || store.append(&submission)).await??;
    info!(rows, "Stored contact submission");
    Ok(Json(ContactResponse::accepted()))
}

/// `GET /api/health`: liveness only, never touches the store.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
