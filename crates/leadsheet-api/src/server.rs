//! API server implementation

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use leadsheet_core::{LeadsheetConfig, SubmissionStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::routes::api_routes;
use crate::state::AppState;
use crate::Result;

/// Leadsheet HTTP server.
///
/// Serves the API routes, falls back to static files for every other path,
/// and optionally allows cross-origin requests.
pub struct Server {
    config: LeadsheetConfig,
    store: Arc<dyn SubmissionStore>,
}

impl Server {
    /// Creates a server using the store described by `config.store`.
    pub fn new(config: LeadsheetConfig) -> Self {
        let store = leadsheet_store::open_store(&config.store);
        Self { config, store }
    }

    /// Creates a server over an already constructed store.
    pub fn with_store(config: LeadsheetConfig, store: Arc<dyn SubmissionStore>) -> Self {
        Self { config, store }
    }

    /// The full application router.
    pub fn router(&self) -> Router {
        let state = AppState::new(Arc::clone(&self.store), self.config.validation.mode());
        let mut app = api_routes(state);

        if let Some(dir) = &self.config.server.static_dir {
            if !dir.is_dir() {
                warn!(dir = %dir.display(), "Static directory does not exist");
            }
            app = app.fallback_service(ServeDir::new(dir));
        }
        if self.config.server.cors {
            app = app.layer(CorsLayer::permissive());
        }
        app.layer(TraceLayer::new_for_http())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serves on an existing listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?;
        info!("Server is running on http://{local}");
        info!(
            path = %self.config.store.path.display(),
            "Contact form data will be saved to the store"
        );
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
