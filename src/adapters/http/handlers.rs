//! HTTP Handlers - Health, Metrics Exposition, and Compute
//!
//! The compute handler owns the per-request trace span and the
//! mapping from `ComputeError` to HTTP status + structured error
//! body. All failures are terminal for their request only; nothing
//! here can take the process down.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, info_span, warn, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use super::AppState;
use crate::domain::ComputeError;

/// Structured error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub error: String,
}

/// Liveness endpoint for orchestrator probes.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy"}))
}

/// Prometheus text exposition of the service registry.
pub async fn export_metrics(State(state): State<AppState>) -> Response {
    match state.metrics.encode() {
        Ok(body) => (
            [(header::CONTENT_TYPE, state.metrics.exposition_content_type())],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics encoding failed").into_response()
        }
    }
}

/// The single compute route: apply the configured operation to the
/// raw request body.
pub async fn compute(State(state): State<AppState>, body: Bytes) -> Response {
    let span = info_span!("compute_request", otel.name = state.operation.span_name());
    let _enter = span.enter();

    let input = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Request body is not valid UTF-8");
            let err = ComputeError::failed(format!("request body is not valid UTF-8: {e}"));
            return failure(&span, &err);
        }
    };

    if input.is_empty() {
        warn!("Empty input received");
        return failure(&span, &ComputeError::EmptyInput);
    }

    match state.operation.apply(input) {
        Ok(output) => {
            state.operation.annotate_span(&span, input, &output);
            info!(
                operation = state.operation.name(),
                input_chars = input.chars().count(),
                "Computation completed"
            );
            (StatusCode::OK, output).into_response()
        }
        Err(err) => {
            error!(operation = state.operation.name(), error = %err, "Computation failed");
            failure(&span, &err)
        }
    }
}

/// Span-side failure description.
///
/// For empty input the services have always recorded
/// `"Empty input received"` on the span while answering the client
/// with the fixed response message; keep both wordings stable.
fn span_error_message(err: &ComputeError) -> String {
    match err {
        ComputeError::EmptyInput => "Empty input received".to_string(),
        ComputeError::Failed { .. } => err.to_string(),
    }
}

/// Mark the span failed and map the error to a status + error body.
fn failure(span: &Span, err: &ComputeError) -> Response {
    span.set_attribute("error", true);
    span.set_attribute("error.message", span_error_message(err));

    let status = match err {
        ComputeError::EmptyInput => StatusCode::BAD_REQUEST,
        ComputeError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}
