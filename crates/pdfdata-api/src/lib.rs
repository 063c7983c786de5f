//! pdfdata API library
//!
//! HTTP handlers, page rendering and application setup for the PDF record
//! service.

mod api_doc;
pub mod constants;
pub mod flash;
mod handlers;
mod templates;
mod views;

pub mod error;
pub mod setup;
pub mod state;

pub use error::ErrorResponse;
pub use state::AppState;
