//! Record store implementations
//!
//! `pdf_record` holds the repository trait and its PostgreSQL implementation;
//! `memory` holds the in-process store used by tests and development runs.

pub mod memory;
pub mod pdf_record;

pub use memory::InMemoryPdfRecordRepository;
pub use pdf_record::{PdfRecordRepository, PostgresPdfRecordRepository};
