//! Telemetry Pipeline - Structured Logging and OTLP Span Export
//!
//! Builds the observability context once at startup: an env-filtered
//! JSON log layer, plus an OpenTelemetry layer exporting batched
//! spans over OTLP/gRPC when a collector endpoint is configured.
//! The returned guard owns the tracer provider; dropping it on
//! process exit flushes pending spans.

use anyhow::{Context, Result};
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Config, RandomIdGenerator, Sampler};
use opentelemetry_sdk::{runtime, Resource};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

/// Owns the tracer provider for the lifetime of the process.
///
/// Dropping the guard shuts the provider down, flushing any spans
/// still sitting in the batch exporter.
pub struct TelemetryGuard {
    provider: Option<opentelemetry_sdk::trace::TracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("error shutting down tracer provider: {e:?}");
            }
        }
    }
}

/// Initialize logging and span export for one service instance.
///
/// With `otlp_endpoint` unset only the JSON log layer is installed,
/// which is how tests and collector-less local runs operate.
///
/// # Errors
/// Returns an error if the log filter is invalid, the OTLP pipeline
/// cannot be built, or a global subscriber is already installed.
pub fn init(config: &ServiceConfig) -> Result<TelemetryGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level filter")?;

    let (otel_layer, provider) = match &config.otlp_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint);

            let provider = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(exporter)
                .with_trace_config(
                    Config::default()
                        .with_sampler(Sampler::AlwaysOn)
                        .with_id_generator(RandomIdGenerator::default())
                        .with_resource(Resource::new(vec![
                            KeyValue::new("service.name", config.service_name.clone()),
                            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
                        ])),
                )
                .install_batch(runtime::Tokio)
                .context("failed to install OTLP tracing pipeline")?;

            let tracer = provider.tracer(config.service_name.clone());
            let layer = tracing_opentelemetry::layer().with_tracer(tracer);
            (Some(layer), Some(provider))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(otel_layer)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(
        service = %config.service_name,
        otlp = config.otlp_endpoint.as_deref().unwrap_or("disabled"),
        "Telemetry initialized"
    );

    Ok(TelemetryGuard { provider })
}
