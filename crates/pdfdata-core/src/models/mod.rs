pub mod pdf_record;

pub use pdf_record::{
    field_messages, CreatePdfRecordRequest, NewPdfRecord, PdfForm, PdfRecord, PdfRecordResponse,
    MAX_PAGE_COUNT, MAX_TITLE_LENGTH,
};
