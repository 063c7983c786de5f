//! Route configuration and setup.
//!
//! HTML pages live at the root, the JSON API under [`API_PREFIX`], health
//! checks in [health](health).

mod health;

use crate::constants::{API_PREFIX, LIST_ROUTE};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    response::Redirect,
    routing::get,
    Json, Router,
};
use pdfdata_core::Config;
use pdfdata_infra::request_id_middleware;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1_024)
        .max(1);
    tracing::debug!(http_concurrency_limit, "HTTP concurrency limit layer enabled");

    let app = Router::new()
        .merge(page_routes())
        .nest(API_PREFIX, api_routes())
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(RequestBodyLimitLayer::new(config.max_form_bytes()))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

/// Server-rendered pages. `/pdfs` is the list route every redirect targets.
fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { Redirect::to(LIST_ROUTE) }))
        .route(
            LIST_ROUTE,
            get(handlers::pdfs::list_pdfs).post(handlers::pdfs::create_pdf),
        )
        .route("/pdfs/{item_id}", get(handlers::pdfs::get_pdf))
        .route(
            "/pdfs/{item_id}/remove",
            get(handlers::pdfs::remove_pdf).post(handlers::pdfs::remove_pdf),
        )
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/pdfs",
            get(handlers::api_pdfs::list_pdf_records).post(handlers::api_pdfs::create_pdf_record),
        )
        .route(
            "/pdfs/{id}",
            get(handlers::api_pdfs::get_pdf_record).delete(handlers::api_pdfs::delete_pdf_record),
        )
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
