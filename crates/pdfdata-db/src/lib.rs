//! pdfdata data access layer

pub mod db;

pub use db::{InMemoryPdfRecordRepository, PdfRecordRepository, PostgresPdfRecordRepository};

use sqlx::migrate::Migrator;

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");
