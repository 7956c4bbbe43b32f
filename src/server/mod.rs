//! HTTP server for the screening insights API.
//!
//! Provides REST endpoints for:
//! - Analyzing posted conversation messages
//! - Analyzing a stored screening by id

pub mod config;
pub mod routes;
pub mod state;

pub use config::{ConfigError, DEFAULT_PORT, ServiceConfig};
pub use routes::create_router;
pub use state::AppState;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Error returned by the serve loop.
pub type ServeError = Box<dyn std::error::Error + Send + Sync>;

/// Router with the browser-facing layers applied.
///
/// Any origin may call the API; every request gets a trace span.
#[must_use]
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server.
///
/// # Errors
/// Returns an error if the server fails to start.
pub async fn run_server(state: Arc<AppState>, port: u16) -> Result<(), ServeError> {
    run_server_with_shutdown(state, port, std::future::pending()).await
}

/// Bind `0.0.0.0:port` and serve until `shutdown_signal` completes.
///
/// # Errors
/// Returns an error if the port cannot be bound or the server fails.
pub async fn run_server_with_shutdown<F>(
    state: Arc<AppState>,
    port: u16,
    shutdown_signal: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port))).await?;
    serve_listener(listener, state, shutdown_signal).await
}

/// Serve the API on an already bound listener.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve_listener<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown_signal: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Screening insights server listening on http://{addr}");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Screening insights server on {addr} stopped");
    Ok(())
}
