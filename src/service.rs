//! Service Runtime - Startup Wiring and Graceful Shutdown
//!
//! The one entry point both binaries share. Wiring sequence:
//! 1. Init telemetry (JSON logging + OTLP span export, guard held)
//! 2. Build the per-service Prometheus registry
//! 3. Assemble the router around the configured computation
//! 4. Serve until SIGINT/SIGTERM, finishing in-flight requests
//! 5. Drop the telemetry guard, flushing pending spans

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::http::{build_router, AppState};
use crate::adapters::metrics::ServiceMetrics;
use crate::adapters::telemetry;
use crate::config::ServiceConfig;
use crate::ports::Computation;

/// Run one single-operation service to completion.
///
/// Blocks until a shutdown signal arrives and the server has drained.
///
/// # Errors
/// Returns an error if telemetry, metrics, or the listener cannot be
/// set up. Individual request failures never surface here.
pub async fn run(config: ServiceConfig, operation: Arc<dyn Computation>) -> Result<()> {
    let _telemetry = telemetry::init(&config)
        .context("Failed to initialize telemetry")?;

    info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        operation = operation.name(),
        port = config.port,
        "Starting service"
    );

    let metrics = Arc::new(
        ServiceMetrics::new(operation.name())
            .context("Failed to register Prometheus metrics")?,
    );
    let state = AppState { metrics, operation };
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(address = %addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install SIGINT handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("SIGINT received, initiating graceful shutdown"),
        () = terminate => info!("SIGTERM received, initiating graceful shutdown"),
    }
}
