//! Service Operations - Digest and Length Computations
//!
//! The two shipped `Computation` implementations. Each pairs a domain
//! function with the span attributes its service has always reported,
//! so dashboards keyed on `hash.length` or `length.result` keep
//! working unchanged.

use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::domain::{char_length, sha256_hex, ComputeError};
use crate::ports::Computation;

/// SHA-256 digest over the request body, served at `POST /hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashOperation;

impl Computation for HashOperation {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn span_name(&self) -> &'static str {
        "calculate_hash"
    }

    fn apply(&self, input: &str) -> Result<String, ComputeError> {
        Ok(sha256_hex(input))
    }

    fn annotate_span(&self, span: &Span, input: &str, output: &str) {
        span.set_attribute("input.length", char_length(input) as i64);
        span.set_attribute("hash.length", output.len() as i64);
    }
}

/// Character count of the request body, served at `POST /length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthOperation;

impl Computation for LengthOperation {
    fn name(&self) -> &'static str {
        "length"
    }

    fn span_name(&self) -> &'static str {
        "calculate_length"
    }

    fn apply(&self, input: &str) -> Result<String, ComputeError> {
        Ok(char_length(input).to_string())
    }

    fn annotate_span(&self, span: &Span, input: &str, _output: &str) {
        span.set_attribute("input.text", input.to_owned());
        span.set_attribute("length.result", char_length(input) as i64);
    }
}
