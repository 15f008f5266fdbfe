use axum::{extract::State, http::StatusCode, Json};
use lakay_core::AppState;
use lakay_primitives::models::system_dto::HealthStatus;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    summary = "Health check endpoint",
    description = "Returns the operational status of the service and the number of live transfer sessions. \
                   This endpoint is **public** and does no network I/O.",
    operation_id = "healthCheck",
    responses(
        (status = 200, description = "Service is healthy and operational", body = HealthStatus),
    ),
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: StatusCode::OK.to_string(),
        message: "API is healthy".to_string(),
        active_sessions: state.sessions.len().await,
    })
}
