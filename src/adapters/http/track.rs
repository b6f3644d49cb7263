//! Request Tracking Middleware - Outcome Counters and Duration
//!
//! Explicit pipeline stage around the compute handler: measures
//! elapsed time, then records the response status counter and the
//! duration histogram after delegating. Every compute request lands
//! here exactly once, whatever its outcome.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::AppState;

/// Time the wrapped handler and record status + duration.
pub async fn track_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let response = next.run(request).await;
    state
        .metrics
        .observe_request(response.status().as_u16(), start.elapsed().as_secs_f64());
    response
}
