//! # leadsheet-api
//!
//! HTTP service for Leadsheet.
//!
//! - `POST /api/contact`: validate a contact payload and append it to the store
//! - `GET /api/health`: liveness check
//! - every other path: static files from the configured directory
//!
//! Errors never escape a handler: validation failures answer 400, store
//! failures answer 500, both as `{success: false, message}`.

#![warn(clippy::all)]

pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use server::Server;
pub use state::AppState;
