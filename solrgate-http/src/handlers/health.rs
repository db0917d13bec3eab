use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::dto::HealthResponse;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let backend = match state.solr.ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::debug!(error = %e, "backend ping failed");
            "down"
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        backend: backend.to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
