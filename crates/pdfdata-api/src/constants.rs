//! Route paths and page constants

/// Versioned JSON API prefix
pub const API_PREFIX: &str = "/api/v0";

/// The list route (`pdfs`); create and remove redirect here.
pub const LIST_ROUTE: &str = "/pdfs";

/// Title shown on the list page
pub const LIST_PAGE_TITLE: &str = "PDFS";

/// Flash notice emitted after a record is removed
pub const REMOVED_NOTICE: &str = "item removed !!!";
