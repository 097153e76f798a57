#![doc = include_str!("../README.md")]

//! Leadsheet Core
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`submission`]: Contact payloads, validation, and persisted records
//! - [`store`]: The `SubmissionStore` trait and write policy
//! - [`response`]: JSON bodies returned by the HTTP service
//! - [`config`]: TOML configuration with environment overrides

pub mod config;
pub mod error;
pub mod response;
pub mod store;
pub mod submission;

// Re-exports for convenience
pub use config::LeadsheetConfig;
pub use error::{Error, Result};
pub use response::{ContactResponse, HealthResponse};
pub use store::{SubmissionStore, WriteMode};
pub use submission::{
    format_timestamp, ContactRequest, Submission, ValidationMode, HEADERS,
    REQUIRED_FIELDS_MESSAGE,
};
