//! Prometheus Metrics Registry - Request Observability
//!
//! Per-service counters and histograms scraped from `GET /metrics`.
//! The registry is constructed explicitly at startup and shared
//! through the router state - no process-wide default registry, so
//! every service instance (and every test) gets its own accumulation.
//!
//! Metric names follow the operation prefix the services have always
//! exported: `hash_request_count`, `length_request_duration_seconds`.

use anyhow::Result;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounterVec, IntGaugeVec, Opts,
    Registry, TextEncoder,
};

/// Duration buckets in seconds, shared by both services.
const DURATION_BUCKETS: &[f64] = &[0.1, 0.3, 0.5, 0.7, 1.0, 3.0];

/// Metrics for one single-operation service instance.
pub struct ServiceMetrics {
    /// Private registry backing the `/metrics` exposition.
    registry: Registry,
    /// Compute requests by response status code.
    pub requests: IntCounterVec,
    /// Compute request duration histogram (seconds).
    pub duration: Histogram,
}

impl ServiceMetrics {
    /// Create and register all metrics for the given operation.
    ///
    /// `operation` becomes the metric name prefix; the info gauge
    /// carries the crate version as a label, set to 1.
    pub fn new(operation: &str) -> Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new(
                format!("{operation}_request_count"),
                format!("Number of {operation} requests"),
            ),
            &["status"],
        )?;

        let duration = Histogram::with_opts(
            HistogramOpts::new(
                format!("{operation}_request_duration_seconds"),
                format!("{operation} request duration in seconds"),
            )
            .buckets(DURATION_BUCKETS.to_vec()),
        )?;

        let service_info = IntGaugeVec::new(
            Opts::new(
                format!("{operation}_service_info"),
                format!("{operation} service info"),
            ),
            &["version"],
        )?;
        service_info
            .with_label_values(&[env!("CARGO_PKG_VERSION")])
            .set(1);

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(duration.clone()))?;
        registry.register(Box::new(service_info))?;

        Ok(Self {
            registry,
            requests,
            duration,
        })
    }

    /// Record one completed compute request.
    pub fn observe_request(&self, status: u16, elapsed_seconds: f64) {
        self.requests
            .with_label_values(&[&status.to_string()])
            .inc();
        self.duration.observe(elapsed_seconds);
    }

    /// Encode the current snapshot in Prometheus text exposition format.
    ///
    /// # Errors
    /// Returns an error if encoding fails or produces invalid UTF-8.
    pub fn encode(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Content type of the text exposition format.
    pub fn exposition_content_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_counts_and_observations() {
        let metrics = ServiceMetrics::new("hash").unwrap();
        metrics.observe_request(200, 0.05);
        metrics.observe_request(200, 0.02);
        metrics.observe_request(400, 0.01);

        let body = metrics.encode().unwrap();
        assert!(body.contains("hash_request_count{status=\"200\"} 2"));
        assert!(body.contains("hash_request_count{status=\"400\"} 1"));
        assert!(body.contains("hash_request_duration_seconds_count 3"));
    }

    #[test]
    fn exposes_service_info_with_version() {
        let metrics = ServiceMetrics::new("length").unwrap();
        let body = metrics.encode().unwrap();
        assert!(body.contains("length_service_info"));
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn registries_are_independent() {
        let a = ServiceMetrics::new("hash").unwrap();
        let b = ServiceMetrics::new("hash").unwrap();
        a.observe_request(200, 0.1);
        assert!(!b.encode().unwrap().contains("hash_request_count{status=\"200\"}"));
    }
}
