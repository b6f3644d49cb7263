//! hash-service — SHA-256 digest over HTTP.
//!
//! `POST /hash` returns the lowercase hex SHA-256 digest of the raw
//! request body. Listens on `PORT` (default 8080).

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};

use textop_service::config::ServiceConfig;
use textop_service::service;
use textop_service::usecases::HashOperation;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env("hash-service", 8080)
        .context("Failed to load configuration")?;
    service::run(config, Arc::new(HashOperation)).await
}
