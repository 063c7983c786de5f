//! Application setup and initialization

pub mod database;
pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use pdfdata_core::Config;
use pdfdata_infra::LogFormat;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    let log_format: LogFormat = config
        .log_format()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid LOG_FORMAT: {}", e))?;
    pdfdata_infra::init_telemetry(log_format, config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let records = database::setup_store(&config).await?;
    let state = AppState::new(records);

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
