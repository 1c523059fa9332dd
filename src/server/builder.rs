//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::{AppState, Clock};
use super::router::{build_api_routes, health_routes, static_routes};
use crate::core::{CatalogStore, ImagePaths};
use anyhow::Result;
use axum::Router;
use axum::http::Method;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the catalog HTTP server
///
/// # Example
///
/// ```ignore
/// let store = SqliteCatalogStore::open("./pizza.sqlite").await?;
/// let app = ServerBuilder::new()
///     .with_store(store)
///     .with_public_dir("./public")
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn CatalogStore>>,
    images: ImagePaths,
    public_dir: Option<PathBuf>,
    clock: Clock,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            images: ImagePaths::default(),
            public_dir: None,
            clock: Utc::now,
        }
    }

    /// Set the catalog store (required)
    pub fn with_store(self, store: impl CatalogStore + 'static) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    /// Set an already shared catalog store (required)
    pub fn with_shared_store(mut self, store: Arc<dyn CatalogStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set how catalog entries build their `image` path
    pub fn with_image_paths(mut self, images: ImagePaths) -> Self {
        self.images = images;
        self
    }

    /// Serve static files from `dir` under `/public`
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = Some(dir.into());
        self
    }

    /// Replace the clock used to pick the pizza of the day
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("CatalogStore is required. Call .with_store()"))?;

        tracing::debug!(backend = store.backend_name(), "Building catalog router");

        let state = AppState::new(store, self.images).with_clock(self.clock);
        let mut app = health_routes().merge(build_api_routes(state));

        if let Some(public_dir) = &self.public_dir {
            app = app.merge(static_routes(public_dir));
        }

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_origin(Any);

        Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and handles SIGTERM and Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
