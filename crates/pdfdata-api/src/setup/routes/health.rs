//! Liveness and readiness checks.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness check - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness check - the record store answers.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut response = serde_json::json!({
        "status": "ready",
        "store": "unknown"
    });

    let ready = match tokio::time::timeout(READINESS_TIMEOUT, state.records.ping()).await {
        Ok(Ok(())) => {
            response["store"] = serde_json::json!("ready");
            true
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Record store readiness check failed");
            response["store"] = serde_json::json!("not_ready");
            false
        }
        Err(_) => {
            tracing::error!("Record store readiness check timed out");
            response["store"] = serde_json::json!("timeout");
            false
        }
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        response["status"] = serde_json::json!("not_ready");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
