//! Template contexts for the HTML pages

use pdfdata_core::models::{field_messages, PdfForm, PdfRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

use crate::constants::LIST_PAGE_TITLE;
use crate::flash::FlashMessage;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Serialize)]
pub struct RecordView {
    pub id: i64,
    pub title: String,
    pub file_url: String,
    pub num_pages: Option<i32>,
    pub created_at: String,
}

impl From<PdfRecord> for RecordView {
    fn from(record: PdfRecord) -> Self {
        RecordView {
            id: record.id,
            title: record.title,
            file_url: record.file_url,
            num_pages: record.num_pages,
            created_at: record.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// A form bound to submitted values, with per-field messages.
#[derive(Debug, Default, Serialize)]
pub struct FormView {
    pub values: PdfForm,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FormView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn invalid(values: PdfForm, errors: &ValidationErrors) -> Self {
        FormView {
            values,
            errors: field_messages(errors),
        }
    }
}

/// Context of `pdfs/index.html`. Every render carries the whole list.
#[derive(Debug, Serialize)]
pub struct ListPage {
    pub title: &'static str,
    pub list: Vec<RecordView>,
    pub form: FormView,
    pub flash: Option<FlashMessage>,
}

impl ListPage {
    pub fn new(records: Vec<PdfRecord>, form: FormView, flash: Option<FlashMessage>) -> Self {
        ListPage {
            title: LIST_PAGE_TITLE,
            list: records.into_iter().map(RecordView::from).collect(),
            form,
            flash,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailPage {
    pub title: String,
    pub item: RecordView,
    pub flash: Option<FlashMessage>,
}

impl DetailPage {
    pub fn new(record: PdfRecord, flash: Option<FlashMessage>) -> Self {
        DetailPage {
            title: record.title.clone(),
            item: record.into(),
            flash,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorPage {
    pub status: u16,
    pub reason: String,
    pub message: String,
}
