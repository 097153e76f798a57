//! Shared handler state.

use std::sync::Arc;

use leadsheet_core::{SubmissionStore, ValidationMode};

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Where accepted submissions go
    pub store: Arc<dyn SubmissionStore>,
    /// How required fields are checked
    pub validation: ValidationMode,
}

impl AppState {
    /// State over `store` with the given validation mode.
    pub fn new(store: Arc<dyn SubmissionStore>, validation: ValidationMode) -> Self {
        Self { store, validation }
    }
}
