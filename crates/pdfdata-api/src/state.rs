//! Application state shared with handlers through axum's `State` extractor.

use pdfdata_db::PdfRecordRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// The record store. Every handler goes through this handle.
    pub records: Arc<dyn PdfRecordRepository>,
}

impl AppState {
    pub fn new(records: Arc<dyn PdfRecordRepository>) -> Arc<Self> {
        Arc::new(Self { records })
    }
}
