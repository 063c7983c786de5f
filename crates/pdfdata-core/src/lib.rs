//! pdfdata core library
//!
//! Domain models, error types and configuration shared by the store and the
//! HTTP layer.

pub mod config;
pub mod error;
pub mod models;

pub use config::{BaseConfig, Config, StoreBackend};
pub use error::{AppError, ErrorMetadata, LogLevel};
