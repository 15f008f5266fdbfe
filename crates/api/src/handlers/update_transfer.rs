use axum::extract::{Json, Path, State};
use lakay_core::services::wizard_service::{
    ApiError, AppState, SelectPaymentMethodRequest, TransferSessionResponse,
    UpdateAmountRequest, UpdateRecipientRequest, WizardService,
};
use lakay_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    put,
    path = "/api/transfers/{id}/amount",
    tag = "Transfers",
    summary = "Set amount and transfer type (step 1)",
    description = "Stores the amount exactly as typed. An empty or non-positive amount is accepted here \
                   but keeps `can_advance` false.",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    request_body = UpdateAmountRequest,
    responses(
        (status = 200, description = "Updated state", body = TransferSessionResponse),
        (status = 400, description = "Not on step 1, or transfer already paid", body = ApiErrorResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn update_amount(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAmountRequest>,
) -> Result<Json<TransferSessionResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(WizardService::update_amount(&state, id, req).await?))
}

#[utoipa::path(
    put,
    path = "/api/transfers/{id}/recipient",
    tag = "Transfers",
    summary = "Set recipient details (step 2)",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    request_body = UpdateRecipientRequest,
    responses(
        (status = 200, description = "Updated state", body = TransferSessionResponse),
        (status = 400, description = "Malformed phone or email, or not on step 2", body = ApiErrorResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn update_recipient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRecipientRequest>,
) -> Result<Json<TransferSessionResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(WizardService::update_recipient(&state, id, req).await?))
}

#[utoipa::path(
    put,
    path = "/api/transfers/{id}/payment-method",
    tag = "Transfers",
    summary = "Select a payment method (step 3)",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    request_body = SelectPaymentMethodRequest,
    responses(
        (status = 200, description = "Updated state", body = TransferSessionResponse),
        (status = 400, description = "Method not offered for this transfer type, or not on step 3", body = ApiErrorResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
    ),
)]
pub async fn select_payment_method(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectPaymentMethodRequest>,
) -> Result<Json<TransferSessionResponse>, ApiError> {
    Ok(Json(
        WizardService::select_payment_method(&state, id, req).await?,
    ))
}
