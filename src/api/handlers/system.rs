//! System endpoints: health check with store reachability.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    database_version: Option<String>,
}

/// `GET /health` — Service health status.
///
/// Probes the store with a fresh connection (`SELECT version()`). An
/// unreachable store degrades the reported status but never fails the
/// endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service status, version, current timestamp, and store reachability.",
    responses(
        (status = 200, description = "Health report", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database, database_version) = match state.persona_service.probe_store().await {
        Ok(version) => ("healthy", "reachable", Some(version)),
        Err(err) => {
            tracing::warn!(error = %err, "store unreachable during health probe");
            ("degraded", "unreachable", None)
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
            database_version,
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
