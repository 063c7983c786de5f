//! Record store setup

use anyhow::{Context, Result};
use pdfdata_core::{Config, StoreBackend};
use pdfdata_db::{InMemoryPdfRecordRepository, PdfRecordRepository, PostgresPdfRecordRepository};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

/// Build the configured record store.
pub async fn setup_store(config: &Config) -> Result<Arc<dyn PdfRecordRepository>> {
    match config.store_backend() {
        StoreBackend::Postgres => {
            let pool = setup_database(config).await?;
            Ok(Arc::new(PostgresPdfRecordRepository::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory record store; records are lost on restart");
            Ok(Arc::new(InMemoryPdfRecordRepository::new()))
        }
    }
}

/// Setup database connection pool and run migrations
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url()
        .context("DATABASE_URL is required for the postgres store")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database connected successfully"
    );

    pdfdata_db::MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
