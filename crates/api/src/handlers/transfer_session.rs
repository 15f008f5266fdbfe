use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use lakay_core::services::wizard_service::{
    ApiError, AppState, TransferSessionResponse, WizardService,
};
use lakay_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/transfers",
    tag = "Transfers",
    summary = "Start a transfer",
    description = "Creates a new in-memory transfer session on step 1 (amount entry) with every field \
                   at its default. Sessions expire after a period of inactivity.",
    responses(
        (status = 201, description = "Session created", body = TransferSessionResponse),
    ),
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<TransferSessionResponse>) {
    let session = WizardService::create(&state).await;
    (StatusCode::CREATED, Json(session))
}

#[utoipa::path(
    get,
    path = "/api/transfers/{id}",
    tag = "Transfers",
    summary = "View a transfer",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 200, description = "Current state", body = TransferSessionResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransferSessionResponse>, ApiError> {
    Ok(Json(WizardService::get(&state, id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/transfers/{id}",
    tag = "Transfers",
    summary = "Cancel a transfer",
    description = "Discards the session. In-flight hosted payments are not cancelled at the provider.",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn cancel_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    WizardService::cancel(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
