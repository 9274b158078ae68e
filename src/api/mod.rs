//! REST API server for the name registry
//!
//! This module provides the HTTP surface over the storage gateway.
//!
//! ## Architecture
//!
//! - **Axum** web framework with Tower middleware
//! - **Trait-object storage** injected through [`ApiState`], so the same
//!   handlers run against MySQL or the in-memory store
//! - **Uniform errors**: every failure path responds with a small JSON body
//!
//! ## Endpoints
//!
//! - `GET /` - Static liveness line
//! - `GET /api/names` - List stored names, newest first
//! - `POST /api/names` - Validate and store a name
//! - `GET /api/health` - Database connectivity probe
//! - anything else - 404 with `{"error":"route not found"}`

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use state::ApiState;
pub use types::{CreateNameRequest, CreateNameResponse, HealthResponse, RootResponse};

use axum::{Router, routing::get};
use std::net::SocketAddr;
use tracing::info;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address (e.g., "0.0.0.0:3000")
    pub bind_addr: SocketAddr,

    /// Enable permissive CORS for browser clients
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            enable_cors: true,
        }
    }
}

/// Build the router with all routes
///
/// Kept separate from [`serve`] so tests can drive the router directly
/// without a listener.
pub fn router(state: ApiState) -> Router {
    use tower_http::trace::TraceLayer;

    // Method routers answer unlisted methods with a bare 405 on their own;
    // the per-route fallback keeps those on the shaped 404 path.
    Router::new()
        .route("/", get(routes::root::root).fallback(routes::not_found))
        .route(
            "/api/names",
            get(routes::names::list_names)
                .post(routes::names::create_name)
                .fallback(routes::not_found),
        )
        .route(
            "/api/health",
            get(routes::health::health_check).fallback(routes::not_found),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Assemble the application [`serve`] runs: routes plus middleware
///
/// Tests go through this too, so the CORS behavior they observe is the one
/// the listener gets.
pub fn app(config: &ApiConfig, state: ApiState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let mut app = router(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Serve the API until the process is told to stop
///
/// Binds the configured address and runs the application with graceful
/// shutdown on Ctrl+C or SIGTERM.
pub async fn serve(config: ApiConfig, state: ApiState) -> anyhow::Result<()> {
    let app = app(&config, state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

/// Resolve once SIGINT or SIGTERM arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C signal");
        }
        _ = terminate => {
            info!("received terminate signal");
        }
    }
}
