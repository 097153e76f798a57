//! Common test harness for leadsheet-api integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use leadsheet_core::{LeadsheetConfig, Submission, SubmissionStore};
use leadsheet_store::SheetStore;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// A server wired to a store and static directory inside a temp dir.
pub struct TestHarness {
    /// Keeps the temp dir alive for the test's duration
    pub dir: TempDir,
    /// Application under test
    pub router: Router,
}

impl TestHarness {
    /// Harness with default settings.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Harness after applying `tweak` to the config.
    pub fn with_config(tweak: impl FnOnce(&mut LeadsheetConfig)) -> Self {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        std::fs::create_dir_all(&public).unwrap();
        std::fs::write(public.join("index.html"), "<h1>Leadsheet</h1>").unwrap();

        let mut config = LeadsheetConfig::default();
        config.store.path = dir.path().join("data.xlsx");
        config.server.static_dir = Some(public);
        tweak(&mut config);

        let router = leadsheet_api::Server::new(config).router();
        Self { dir, router }
    }

    /// Harness over a custom store.
    pub fn with_store(store: Arc<dyn SubmissionStore>) -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = LeadsheetConfig::default();
        config.server.static_dir = None;
        let router = leadsheet_api::Server::with_store(config, store).router();
        Self { dir, router }
    }

    /// Path of the store file.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("data.xlsx")
    }

    /// Records currently in the store file.
    pub fn records(&self) -> Vec<Submission> {
        SheetStore::new(self.store_path(), "Contact Form Data")
            .read_records()
            .unwrap()
    }

    /// Sends a request and returns status plus raw body.
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    /// POSTs a JSON body to `/api/contact`.
    pub async fn post_json(&self, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, bytes) = self.send(req).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// GETs `/api/health`.
    pub async fn health(&self) -> (StatusCode, Value) {
        let req = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, bytes) = self.send(req).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

/// A store whose every call fails like an unreadable file.
pub struct FailingStore;

impl SubmissionStore for FailingStore {
    fn append(&self, _submission: &Submission) -> leadsheet_core::Result<usize> {
        Err(leadsheet_core::Error::storage("disk unavailable"))
    }

    fn records(&self) -> leadsheet_core::Result<Vec<Submission>> {
        Err(leadsheet_core::Error::storage("disk unavailable"))
    }
}
