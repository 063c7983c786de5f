use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use url::Url;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_PAGE_COUNT: i32 = 100_000;

/// A stored PDF metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PdfRecord {
    pub id: i64,
    pub title: String,
    pub file_url: String,
    pub num_pages: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a record that does not exist yet.
///
/// The store assigns `id` and `created_at` on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPdfRecord {
    pub title: String,
    pub file_url: String,
    pub num_pages: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PdfRecordResponse {
    pub id: i64,
    pub title: String,
    pub file_url: String,
    pub num_pages: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<PdfRecord> for PdfRecordResponse {
    fn from(record: PdfRecord) -> Self {
        PdfRecordResponse {
            id: record.id,
            title: record.title,
            file_url: record.file_url,
            num_pages: record.num_pages,
            created_at: record.created_at,
        }
    }
}

/// Raw HTML form submission.
///
/// Every field is kept as the submitted string so a bad value becomes a field
/// error on the re-rendered form rather than a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PdfForm {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    #[validate(
        length(max = 2048, message = "File URL must be at most 2048 characters"),
        custom(function = "validate_file_url")
    )]
    pub file_url: String,
    #[serde(default)]
    #[validate(custom(function = "validate_page_count"))]
    pub num_pages: String,
}

impl PdfForm {
    /// Validate the submission and normalize it into a [`NewPdfRecord`].
    pub fn validated(&self) -> Result<NewPdfRecord, ValidationErrors> {
        self.validate()?;
        Ok(NewPdfRecord {
            title: self.title.trim().to_string(),
            file_url: self.file_url.trim().to_string(),
            num_pages: parse_page_count(&self.num_pages).ok().flatten(),
        })
    }
}

/// Request DTO for creating a record through the JSON API
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePdfRecordRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(
        length(max = 2048, message = "File URL must be at most 2048 characters"),
        custom(function = "validate_file_url")
    )]
    pub file_url: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 100000, message = "Page count must be between 1 and 100000"))]
    pub num_pages: Option<i32>,
}

impl CreatePdfRecordRequest {
    pub fn validated(&self) -> Result<NewPdfRecord, ValidationErrors> {
        self.validate()?;
        Ok(NewPdfRecord {
            title: self.title.trim().to_string(),
            file_url: self.file_url.trim().to_string(),
            num_pages: self.num_pages,
        })
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("This field is required")));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("Title must be at most 255 characters")));
    }
    Ok(())
}

/// Only absolute `http`/`https` URLs with a host; the value ends up in an `href`.
fn validate_file_url(raw: &str) -> Result<(), ValidationError> {
    let invalid =
        || ValidationError::new("url").with_message(Cow::Borrowed("Enter a valid URL"));
    let parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        _ => Err(invalid()),
    }
}

fn validate_page_count(raw: &str) -> Result<(), ValidationError> {
    parse_page_count(raw).map(|_| ())
}

/// Empty input means "unknown"; anything else must be an integer in range.
fn parse_page_count(raw: &str) -> Result<Option<i32>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<i32>() {
        Ok(n) if (1..=MAX_PAGE_COUNT).contains(&n) => Ok(Some(n)),
        Ok(_) => Err(ValidationError::new("range")
            .with_message(Cow::Borrowed("Page count must be between 1 and 100000"))),
        Err(_) => Err(ValidationError::new("invalid")
            .with_message(Cow::Borrowed("Enter a whole number"))),
    }
}

/// Flatten validation errors into `field -> messages`, ordered by field name.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
