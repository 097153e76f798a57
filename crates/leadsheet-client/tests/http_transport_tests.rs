//! End-to-end tests: the HTTP transport against a running service.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use std::net::SocketAddr;
use std::sync::Arc;

use common::{MemoryPage, RecordingNotifier};
use leadsheet_api::Server;
use leadsheet_client::{ContactTransport, FormField, HttpTransport, SiteController, SubmitOutcome};
use leadsheet_core::{ContactRequest, LeadsheetConfig, REQUIRED_FIELDS_MESSAGE};
use leadsheet_store::SheetStore;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct RunningServer {
    dir: TempDir,
    addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
}

impl RunningServer {
    async fn start() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = LeadsheetConfig::default();
        config.store.path = dir.path().join("data.xlsx");
        config.server.static_dir = None;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            Server::new(config)
                .serve_on(listener, async move {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });
        Self {
            dir,
            addr,
            stop: Some(tx),
        }
    }

    fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn rows(&self) -> usize {
        SheetStore::new(self.dir.path().join("data.xlsx"), "Contact Form Data")
            .read_records()
            .unwrap()
            .len()
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_submit_and_health_round_trip() {
    let server = RunningServer::start().await;
    let transport = HttpTransport::new(server.url()).unwrap();

    let health = transport.health().await.unwrap();
    assert_eq!(health.status, "OK");

    let response = transport
        .submit(&ContactRequest::new("Alice", "a@b.com", "Acme", "Hi"))
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(server.rows(), 1);
}

#[tokio::test]
async fn test_rejection_is_a_structured_answer() {
    let server = RunningServer::start().await;
    let transport = HttpTransport::new(server.url()).unwrap();

    let response = transport
        .submit(&ContactRequest::new("", "a@b.com", "", "Hi"))
        .await
        .unwrap();
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some(REQUIRED_FIELDS_MESSAGE));
    assert_eq!(server.rows(), 0);
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(format!("http://{addr}")).unwrap();
    let result = transport
        .submit(&ContactRequest::new("Alice", "a@b.com", "", "Hi"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_controller_against_live_service() {
    let server = RunningServer::start().await;
    let page = MemoryPage::with_form("Dana", "d@x.com", "", "Call me");
    let ctl = SiteController::new(
        Arc::clone(&page),
        HttpTransport::new(server.url()).unwrap(),
        RecordingNotifier::default(),
    );

    assert_eq!(ctl.on_submit().await, SubmitOutcome::Sent);
    assert_eq!(page.field(FormField::Name), "");
    assert_eq!(server.rows(), 1);
}
