//! Startup helpers for the screening insights server.

use std::process::ExitCode;
use std::sync::Arc;

use crate::server::{self, AppState, ServiceConfig};

/// Run the server until Ctrl+C.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    init_tracing();

    tracing::info!("Starting screening insights v{}", env!("CARGO_PKG_VERSION"));

    let (config, state) = match initialize() {
        Ok(initialized) => initialized,
        Err(e) => {
            tracing::error!("Failed to initialize: {e}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server_with_shutdown(
        state,
        config.port,
        shutdown_signal(),
    )) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    tracing::info!("Server stopped");
    ExitCode::SUCCESS
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives are honored on top of a default `info` level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Read configuration and build application state without starting the server.
///
/// # Errors
/// Returns an error if configuration or state creation fails.
pub fn initialize()
-> Result<(ServiceConfig, Arc<AppState>), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServiceConfig::from_env()?;
    match &config.upstream {
        Some(upstream) => tracing::info!("Upstream staffing API: {}", upstream.base_url),
        None => tracing::info!("No upstream configured; screening lookups disabled"),
    }

    let state = AppState::from_config(&config)?;
    Ok((config, state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
