use axum::extract::{Json, Path, State};
use lakay_core::services::wizard_service::{
    ApiError, AppState, TransferSessionResponse, TransitionResponse, WizardService,
};
use lakay_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/transfers/{id}/next",
    tag = "Transfers",
    summary = "Go to the next step",
    description = "Moves forward only when the current step is complete: a positive amount on step 1, \
                   every required recipient field on step 2, a payment method on step 3. \
                   Otherwise nothing changes and `moved` is false.",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 200, description = "Transition result", body = TransitionResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransitionResponse>, ApiError> {
    Ok(Json(WizardService::next(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/transfers/{id}/previous",
    tag = "Transfers",
    summary = "Go back one step",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 200, description = "Transition result", body = TransitionResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn previous_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransitionResponse>, ApiError> {
    Ok(Json(WizardService::previous(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/transfers/{id}/reset",
    tag = "Transfers",
    summary = "Start over",
    description = "Returns the session to step 1 with every field at its default.",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 200, description = "Fresh state", body = TransferSessionResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn reset_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransferSessionResponse>, ApiError> {
    Ok(Json(WizardService::reset(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/transfers/{id}/dismiss-error",
    tag = "Transfers",
    summary = "Dismiss the payment error banner",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 200, description = "Updated state", body = TransferSessionResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn dismiss_error(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransferSessionResponse>, ApiError> {
    Ok(Json(WizardService::dismiss_error(&state, id).await?))
}
