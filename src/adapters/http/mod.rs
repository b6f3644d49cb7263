//! HTTP Adapter - Instrumented Single-Operation Router
//!
//! Assembles the surface every service exposes: `GET /health`,
//! `GET /metrics`, and one `POST /<operation>` compute route. The
//! request-tracking middleware wraps only the compute route, so
//! health checks and metric scrapes never move the request counters.

pub mod handlers;
pub mod track;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::adapters::metrics::ServiceMetrics;
use crate::ports::Computation;

/// Request-handling context shared across all routes.
///
/// Constructed once at startup and injected through router state -
/// there are no process-wide observability globals.
#[derive(Clone)]
pub struct AppState {
    /// Per-service Prometheus registry.
    pub metrics: Arc<ServiceMetrics>,
    /// The configured computation.
    pub operation: Arc<dyn Computation>,
}

/// Build the service router for the configured operation.
pub fn build_router(state: AppState) -> Router {
    let compute_path = format!("/{}", state.operation.name());
    let compute_routes = Router::new()
        .route(&compute_path, post(handlers::compute))
        .route_layer(from_fn_with_state(state.clone(), track::track_request));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::export_metrics))
        .merge(compute_routes)
        .with_state(state)
}
