//! HTTP server module
//!
//! Exposes the checker as `GET /check` behind a permissive, GET-only CORS
//! policy. This module is `pub` so integration tests can drive the router
//! directly without binding a socket.

mod params;
mod routes;

pub use params::{CheckParams, ParamError};
pub use routes::{check_handler, ApiError};

use crate::checker::RobotsChecker;
use crate::config::Config;
use axum::{http::Method, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub checker: RobotsChecker,
    /// Bots checked when a request names none
    pub default_bots: Arc<[String]>,
}

impl AppState {
    /// Builds handler state from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            checker: RobotsChecker::new(&config.fetcher)?,
            default_bots: config.bots.default.clone().into(),
        })
    }
}

/// Creates a CORS layer allowing any origin and header, GET only
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Builds the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check", get(check_handler))
        .layer(cors_layer())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C
pub async fn serve(config: &Config) -> crate::Result<()> {
    let state = AppState::from_config(config)?;
    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
