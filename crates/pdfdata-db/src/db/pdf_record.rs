use async_trait::async_trait;
use pdfdata_core::models::{NewPdfRecord, PdfRecord};
use pdfdata_core::AppError;
use sqlx::{PgPool, Postgres};

/// Record store operations used by the request handlers.
///
/// Handlers receive an implementation through the application state, so the
/// same flow runs against PostgreSQL in production and the in-memory store in
/// tests.
#[async_trait]
pub trait PdfRecordRepository: Send + Sync {
    /// All records, newest first (ties broken by descending id).
    async fn list_recent(&self) -> Result<Vec<PdfRecord>, AppError>;

    /// A single record, or `None` when the id was never issued or was deleted.
    async fn get(&self, id: i64) -> Result<Option<PdfRecord>, AppError>;

    /// Insert a record; the store assigns `id` and `created_at`.
    async fn create(&self, new: NewPdfRecord) -> Result<PdfRecord, AppError>;

    /// Delete a record. Returns `false` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round-trip used by the readiness check.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed record store
#[derive(Clone)]
pub struct PostgresPdfRecordRepository {
    pool: PgPool,
}

impl PostgresPdfRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PdfRecordRepository for PostgresPdfRecordRepository {
    #[tracing::instrument(skip(self), fields(db.table = "pdf_records", db.operation = "select"))]
    async fn list_recent(&self) -> Result<Vec<PdfRecord>, AppError> {
        let records = sqlx::query_as::<Postgres, PdfRecord>(
            "SELECT id, title, file_url, num_pages, created_at FROM pdf_records ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    #[tracing::instrument(skip(self), fields(db.table = "pdf_records", db.operation = "select", db.record_id = id))]
    async fn get(&self, id: i64) -> Result<Option<PdfRecord>, AppError> {
        let record = sqlx::query_as::<Postgres, PdfRecord>(
            "SELECT id, title, file_url, num_pages, created_at FROM pdf_records WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    #[tracing::instrument(skip(self, new), fields(db.table = "pdf_records", db.operation = "insert"))]
    async fn create(&self, new: NewPdfRecord) -> Result<PdfRecord, AppError> {
        let record = sqlx::query_as::<Postgres, PdfRecord>(
            r#"
            INSERT INTO pdf_records (title, file_url, num_pages)
            VALUES ($1, $2, $3)
            RETURNING id, title, file_url, num_pages, created_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.file_url)
        .bind(new.num_pages)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(record_id = record.id, "PDF record inserted");
        Ok(record)
    }

    #[tracing::instrument(skip(self), fields(db.table = "pdf_records", db.operation = "delete", db.record_id = id))]
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM pdf_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
