//! Computation Port - Single-Operation Service Interface
//!
//! The one seam between the shared HTTP harness and a concrete
//! service. An implementation names its route and trace span, applies
//! a pure text-to-text function, and attaches its service-specific
//! attributes to the request span.

use tracing::Span;

use crate::domain::ComputeError;

/// A single-operation service's computation.
///
/// Implementations must be pure: deterministic, no I/O, no state
/// across requests. The harness guarantees `apply` is never called
/// with an empty input (the empty-input guard lives at the HTTP
/// boundary).
pub trait Computation: Send + Sync + 'static {
    /// Operation name: the POST route path segment and the metric
    /// name prefix (e.g. `hash` serves `POST /hash` and emits
    /// `hash_request_count`).
    fn name(&self) -> &'static str;

    /// Trace span name for one compute request (e.g. `calculate_hash`).
    fn span_name(&self) -> &'static str;

    /// Apply the computation to the request body.
    ///
    /// # Errors
    /// Returns `ComputeError::Failed` on any unexpected failure; the
    /// harness maps it to a 500 response.
    fn apply(&self, input: &str) -> Result<String, ComputeError>;

    /// Attach result-derived attributes to the active request span.
    ///
    /// Called only after `apply` succeeded, with the input and the
    /// produced output.
    fn annotate_span(&self, span: &Span, input: &str, output: &str);
}
