//! Configuration validation
//!
//! Checks configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use pdfdata_core::{Config, StoreBackend};

/// Validate critical configuration values, failing fast on anything that would
/// only surface later as a runtime error.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.is_production() && config.cors_origins().iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production. \
            Please set specific allowed origins via CORS_ORIGINS environment variable."
        ));
    }

    if config.is_production() && config.store_backend() == StoreBackend::Memory {
        tracing::warn!("In-memory record store selected in production - records will not survive a restart");
    }

    if config.db_max_connections() == 0 {
        return Err(anyhow::anyhow!("Database max connections cannot be 0"));
    }

    if config.db_timeout_seconds() == 0 {
        return Err(anyhow::anyhow!("Database timeout cannot be 0"));
    }

    if config.max_form_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_FORM_BYTES cannot be 0"));
    }

    Ok(())
}
