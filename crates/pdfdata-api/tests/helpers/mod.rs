//! Test helpers: build AppState and router over the in-memory record store.
//!
//! Run from workspace root: `cargo test -p pdfdata-api`.

#![allow(dead_code)]

use axum_test::TestServer;
use pdfdata_api::constants;
use pdfdata_api::setup::routes;
use pdfdata_api::AppState;
use pdfdata_core::Config;
use pdfdata_db::{InMemoryPdfRecordRepository, PdfRecordRepository};
use std::sync::Arc;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server plus a handle on the store it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub records: InMemoryPdfRecordRepository,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "STORE_BACKEND" => Some("memory".to_string()),
        "ENVIRONMENT" => Some("test".to_string()),
        _ => None,
    })
    .expect("test config")
}

/// Server over an arbitrary store, for failure paths the in-memory store never hits.
pub fn server_with_store(records: Arc<dyn PdfRecordRepository>) -> TestServer {
    let state = AppState::new(records);
    let router = routes::setup_routes(&test_config(), state).expect("routes");
    TestServer::new(router).expect("test server")
}

pub fn setup_test_app() -> TestApp {
    let records = InMemoryPdfRecordRepository::new();
    let server = server_with_store(Arc::new(records.clone()));

    TestApp { server, records }
}
