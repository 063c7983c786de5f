//! Server-rendered PDF record pages

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header::SET_COOKIE, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use pdfdata_core::models::PdfForm;
use pdfdata_core::AppError;
use serde::Serialize;
use std::sync::Arc;

use super::parse_record_id;
use crate::constants::{LIST_ROUTE, REMOVED_NOTICE};
use crate::error::PageError;
use crate::flash::{clear_flash_cookie, FlashMessage, IncomingFlash};
use crate::state::AppState;
use crate::templates::renderer;
use crate::views::{DetailPage, FormView, ListPage};

/// Render a page, expiring the flash cookie when a notice was shown.
fn render<T: Serialize>(
    template: &str,
    page: &T,
    status: StatusCode,
    flash_shown: bool,
) -> Result<Response, PageError> {
    let html = renderer().render_page(template, page)?;
    let mut response = (status, Html(html)).into_response();
    if flash_shown {
        if let Ok(value) = HeaderValue::from_str(&clear_flash_cookie()) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    Ok(response)
}

/// Oversized bodies keep their 413; anything else the extractor refuses is a 400.
fn form_rejection_error(rejection: FormRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Form submission is too large".to_string())
    } else {
        AppError::BadRequest(format!("Invalid form submission: {}", rejection.body_text()))
    }
}

/// `GET /pdfs`: every record, newest first, and an empty form.
pub async fn list_pdfs(
    State(state): State<Arc<AppState>>,
    IncomingFlash(flash): IncomingFlash,
) -> Result<Response, PageError> {
    let records = state.records.list_recent().await?;
    let flash_shown = flash.is_some();
    let page = ListPage::new(records, FormView::empty(), flash);
    render("pdfs/index.html", &page, StatusCode::OK, flash_shown)
}

/// `POST /pdfs`: insert and redirect, or re-render the full list page with
/// the bound form and its errors.
pub async fn create_pdf(
    State(state): State<Arc<AppState>>,
    IncomingFlash(flash): IncomingFlash,
    form: Result<Form<PdfForm>, FormRejection>,
) -> Result<Response, PageError> {
    let Form(form) = form.map_err(form_rejection_error)?;

    match form.validated() {
        Ok(new_record) => {
            let record = state.records.create(new_record).await?;
            tracing::info!(record_id = record.id, "PDF record created");
            Ok(Redirect::to(LIST_ROUTE).into_response())
        }
        Err(errors) => {
            tracing::debug!(errors = %errors, "PDF form rejected");
            let records = state.records.list_recent().await?;
            let flash_shown = flash.is_some();
            let page = ListPage::new(records, FormView::invalid(form, &errors), flash);
            render(
                "pdfs/index.html",
                &page,
                StatusCode::UNPROCESSABLE_ENTITY,
                flash_shown,
            )
        }
    }
}

/// `GET /pdfs/{item_id}`
pub async fn get_pdf(
    State(state): State<Arc<AppState>>,
    IncomingFlash(flash): IncomingFlash,
    Path(item_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_record_id(&item_id)?;
    let record = state
        .records
        .get(id)
        .await?
        .ok_or_else(|| AppError::record_not_found(id))?;

    let flash_shown = flash.is_some();
    render(
        "pdfs/detail.html",
        &DetailPage::new(record, flash),
        StatusCode::OK,
        flash_shown,
    )
}

/// `GET|POST /pdfs/{item_id}/remove`: delete, leave a notice, back to the list.
pub async fn remove_pdf(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<Response, PageError> {
    let id = parse_record_id(&item_id)?;
    if !state.records.delete(id).await? {
        return Err(AppError::record_not_found(id).into());
    }
    tracing::info!(record_id = id, "PDF record removed");

    let notice = FlashMessage::info(REMOVED_NOTICE);
    Ok((
        [(SET_COOKIE, notice.to_set_cookie())],
        Redirect::to(LIST_ROUTE),
    )
        .into_response())
}
