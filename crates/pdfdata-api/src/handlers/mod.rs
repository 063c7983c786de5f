pub mod api_pdfs;
pub mod pdfs;

use pdfdata_core::AppError;

/// Parse a record id taken from the URL.
///
/// Anything that is not a positive integer cannot name a stored record, so it
/// is reported as a missing record rather than a malformed request.
pub(crate) fn parse_record_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound(format!("No PDF record with id {}", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("42").unwrap(), 42);
        for raw in ["abc", "0", "-3", "1.5", ""] {
            assert_eq!(parse_record_id(raw).unwrap_err().error_type(), "NotFound");
        }
    }
}
