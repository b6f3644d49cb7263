//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Concrete infrastructure behind the harness: the axum HTTP surface,
//! the Prometheus registry, and the OTLP tracing pipeline. Each
//! sub-module groups one infrastructure concern.
//!
//! Adapter categories:
//! - `http`: axum router, handlers, and request-tracking middleware
//! - `metrics`: Prometheus counters/histograms and text exposition
//! - `telemetry`: tracing subscriber + OTLP span export pipeline

pub mod http;
pub mod metrics;
pub mod telemetry;
