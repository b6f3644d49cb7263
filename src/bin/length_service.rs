//! length-service — character count over HTTP.
//!
//! `POST /length` returns the decimal Unicode character count of the
//! raw request body. Listens on `PORT` (default 8081).

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;

use anyhow::{Context, Result};

use textop_service::config::ServiceConfig;
use textop_service::service;
use textop_service::usecases::LengthOperation;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::from_env("length-service", 8081)
        .context("Failed to load configuration")?;
    service::run(config, Arc::new(LengthOperation)).await
}
