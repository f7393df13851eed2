//! Web layer module
//!
//! This module provides the HTTP interface for the imager service.
//! Handlers stay thin: they validate parameters at the boundary and
//! delegate to the renderer and the stats store.
//!
//! # Routes
//!
//! - `GET /img/{width}/{height}?square=&text=`: render a placeholder image
//! - `GET /stats/...`: read the rolling usage statistics
//! - `DELETE /stats`: clear every statistic
//! - anything else falls through to the static file directory

use anyhow::Result;
use axum::{
    Router,
    routing::{delete, get},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::{config::Config, renderer::ImageRenderer, stats::StatsStore};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;

pub use extractors::ImageQuery;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(
        config: Config,
        stats: StatsStore,
        renderer: Arc<dyn ImageRenderer>,
    ) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState {
            config: Arc::new(config),
            stats,
            renderer,
        });

        Ok(Self { app, addr })
    }

    /// Serve until SIGINT/SIGTERM
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", self.addr, e))?;

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.web.static_dir);

    Router::new()
        .route("/img/{width}/{height}", get(handlers::images::serve_image))
        .route("/stats", delete(handlers::stats::reset_stats))
        .route("/stats/paths/recent", get(handlers::stats::recent_paths))
        .route("/stats/sizes/recent", get(handlers::stats::recent_sizes))
        .route("/stats/texts/recent", get(handlers::stats::recent_texts))
        .route("/stats/sizes/top", get(handlers::stats::top_sizes))
        .route("/stats/referrers/top", get(handlers::stats::top_referrers))
        .route("/stats/hits", get(handlers::stats::hit_counts))
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn(middleware::request_logging_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            tracing::warn!("Failed to install signal handlers, graceful shutdown disabled");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT (Ctrl+C), shutting down gracefully");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub stats: StatsStore,
    pub renderer: Arc<dyn ImageRenderer>,
}
