use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pdfdata_core::models::{CreatePdfRecordRequest, PdfRecordResponse};
use pdfdata_core::AppError;
use std::sync::Arc;

use super::parse_record_id;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v0/pdfs",
    tag = "pdfs",
    responses(
        (status = 200, description = "All PDF records, newest first", body = Vec<PdfRecordResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_pdf_records(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let records = state.records.list_recent().await?;
    let response: Vec<PdfRecordResponse> = records.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v0/pdfs/{id}",
    tag = "pdfs",
    params(
        ("id" = i64, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record found", body = PdfRecordResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_pdf_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_record_id(&id)?;
    let record = state
        .records
        .get(id)
        .await?
        .ok_or_else(|| AppError::record_not_found(id))?;

    Ok(Json(PdfRecordResponse::from(record)))
}

#[utoipa::path(
    post,
    path = "/api/v0/pdfs",
    tag = "pdfs",
    request_body = CreatePdfRecordRequest,
    responses(
        (status = 201, description = "Record created", body = PdfRecordResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_pdf_record(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreatePdfRecordRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let new_record = request.validated()?;
    let record = state.records.create(new_record).await?;
    tracing::info!(record_id = record.id, "PDF record created via API");

    Ok((StatusCode::CREATED, Json(PdfRecordResponse::from(record))))
}

#[utoipa::path(
    delete,
    path = "/api/v0/pdfs/{id}",
    tag = "pdfs",
    params(
        ("id" = i64, Path, description = "Record ID")
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_pdf_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let id = parse_record_id(&id)?;
    if !state.records.delete(id).await? {
        return Err(AppError::record_not_found(id).into());
    }
    tracing::info!(record_id = id, "PDF record deleted via API");

    Ok(StatusCode::NO_CONTENT)
}
