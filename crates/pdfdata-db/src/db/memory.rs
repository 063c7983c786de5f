//! In-memory record store
//!
//! Backs the test suites and `STORE_BACKEND=memory` development runs. Ids come
//! from a counter that is never rewound, so deleted ids are not reissued.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pdfdata_core::models::{NewPdfRecord, PdfRecord};
use pdfdata_core::AppError;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::pdf_record::PdfRecordRepository;

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    last_created_at: Option<DateTime<Utc>>,
    records: BTreeMap<i64, PdfRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryPdfRecordRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryPdfRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.lock().map(|state| state.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("in-memory record store lock poisoned".to_string()))
    }
}

#[async_trait]
impl PdfRecordRepository for InMemoryPdfRecordRepository {
    async fn list_recent(&self) -> Result<Vec<PdfRecord>, AppError> {
        let state = self.lock()?;
        let mut records: Vec<PdfRecord> = state.records.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }

    async fn get(&self, id: i64) -> Result<Option<PdfRecord>, AppError> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    async fn create(&self, new: NewPdfRecord) -> Result<PdfRecord, AppError> {
        let mut state = self.lock()?;
        state.last_id += 1;

        // Creation dates never go backwards even if the wall clock does.
        let now = Utc::now();
        let created_at = match state.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        state.last_created_at = Some(created_at);

        let record = PdfRecord {
            id: state.last_id,
            title: new.title,
            file_url: new.file_url,
            num_pages: new.num_pages,
            created_at,
        };
        state.records.insert(record.id, record.clone());
        tracing::debug!(record_id = record.id, "PDF record inserted (memory)");
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.lock()?.records.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
