//! OpenAPI documentation for the JSON API, served at `/api/openapi.json`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use pdfdata_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "pdfdata API",
        version = "0.1.0",
        description = "PDF metadata records (v0). All JSON endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::api_pdfs::list_pdf_records,
        handlers::api_pdfs::get_pdf_record,
        handlers::api_pdfs::create_pdf_record,
        handlers::api_pdfs::delete_pdf_record,
    ),
    components(
        schemas(
            models::PdfRecordResponse,
            models::CreatePdfRecordRequest,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "pdfs", description = "PDF metadata record operations")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
