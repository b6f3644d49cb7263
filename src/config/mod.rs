//! Configuration Module - Environment-driven Service Settings
//!
//! Each service reads its settings from the environment exactly once
//! at startup and never re-reads them. The binaries supply their
//! defaults (identity and port); the environment overrides them for
//! deployment.
//!
//! Variables:
//! - `PORT`          - HTTP listen port
//! - `OTLP_ENDPOINT` - trace collector endpoint; empty disables export
//! - `SERVICE_NAME`  - overrides the binary's default identity
//! - `LOG_LEVEL`     - default filter when `RUST_LOG` is unset

use anyhow::{Context, Result};

/// Default trace collector, matching the deployment's Jaeger sidecar.
const DEFAULT_OTLP_ENDPOINT: &str = "http://jaeger:4317";

/// Settings for one service instance.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service identity used for tracing resource attributes and logs.
    pub service_name: String,
    /// HTTP listen port.
    pub port: u16,
    /// OTLP trace collector endpoint. `None` disables span export.
    pub otlp_endpoint: Option<String>,
    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number,
    /// or if validation fails.
    pub fn from_env(default_name: &str, default_port: u16) -> Result<Self> {
        let service_name = std::env::var("SERVICE_NAME")
            .unwrap_or_else(|_| default_name.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => default_port,
        };

        // Empty string is the documented way to run without a collector.
        let otlp_endpoint = match std::env::var("OTLP_ENDPOINT") {
            Ok(endpoint) if endpoint.is_empty() => None,
            Ok(endpoint) => Some(endpoint),
            Err(_) => Some(DEFAULT_OTLP_ENDPOINT.to_string()),
        };

        let log_level =
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let config = Self {
            service_name,
            port,
            otlp_endpoint,
            log_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration parameters.
    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.service_name.is_empty(),
            "service name must not be empty"
        );
        anyhow::ensure!(self.port != 0, "listen port must not be 0");
        anyhow::ensure!(
            !self.log_level.is_empty(),
            "log level must not be empty"
        );
        Ok(())
    }
}
