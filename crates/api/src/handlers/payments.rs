use axum::extract::{Json, Path, Query, State};
use lakay_core::services::payment_service::{
    ApiError, AppState, InitiatePaymentResponse, OrderResponse, PaymentConfirmation,
    PaymentService,
};
use lakay_primitives::error::ApiErrorResponse;
use lakay_primitives::models::payment_dto::{MonCashReturnQuery, PayPalCaptureRequest};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/transfers/{id}/payments",
    tag = "Payments",
    summary = "Start a hosted payment",
    description = "Creates a PayPal order (international) or MonCash payment (national) for the transfer \
                   total and returns the URL the sender must be redirected to. Only valid on the payment \
                   step with a hosted method selected.",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    responses(
        (status = 200, description = "Payment created", body = InitiatePaymentResponse),
        (status = 400, description = "Not on the payment step, offline method, or already paid", body = ApiErrorResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
        (status = 502, description = "Payment provider error", body = ApiErrorResponse),
    ),
)]
pub async fn initiate_payment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<InitiatePaymentResponse>, ApiError> {
    Ok(Json(PaymentService::initiate(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/transfers/{id}/paypal/capture",
    tag = "Payments",
    summary = "Capture an approved PayPal order",
    description = "Called after the sender approves the order on PayPal. On success the transfer \
                   moves to the receipt with a completed payment.",
    params(("id" = Uuid, Path, description = "Transfer session id")),
    request_body = PayPalCaptureRequest,
    responses(
        (status = 200, description = "Payment captured", body = PaymentConfirmation),
        (status = 400, description = "Unknown order for this transfer", body = ApiErrorResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
        (status = 502, description = "Capture failed or amount mismatch", body = ApiErrorResponse),
    ),
)]
pub async fn paypal_capture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<PayPalCaptureRequest>,
) -> Result<Json<PaymentConfirmation>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let confirmation = PaymentService::capture_paypal(&state, id, req.order_id).await?;
    Ok(Json(confirmation))
}

#[utoipa::path(
    get,
    path = "/api/transfers/{id}/moncash/return",
    tag = "Payments",
    summary = "MonCash return callback",
    description = "MonCash redirects the sender here with `transactionId`. The transaction is looked \
                   up with MonCash and must match this transfer's reference and total.",
    params(
        ("id" = Uuid, Path, description = "Transfer session id"),
        MonCashReturnQuery
    ),
    responses(
        (status = 200, description = "Payment confirmed", body = PaymentConfirmation),
        (status = 400, description = "No MonCash payment in progress", body = ApiErrorResponse),
        (status = 404, description = "Unknown or expired session", body = ApiErrorResponse),
        (status = 502, description = "Payment rejected or provider error", body = ApiErrorResponse),
    ),
)]
pub async fn moncash_return(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<MonCashReturnQuery>,
) -> Result<Json<PaymentConfirmation>, ApiError> {
    let transaction_id = query.transaction_id.trim();
    if transaction_id.is_empty() {
        return Err(ApiError::BadRequest("transactionId is required".into()));
    }

    let confirmation =
        PaymentService::confirm_moncash(&state, id, transaction_id.to_string()).await?;
    Ok(Json(confirmation))
}

#[utoipa::path(
    get,
    path = "/api/paypal/orders/{order_id}",
    tag = "Payments",
    summary = "PayPal order status",
    params(("order_id" = String, Path, description = "PayPal order id")),
    responses(
        (status = 200, description = "Order status", body = OrderResponse),
        (status = 400, description = "Invalid order id", body = ApiErrorResponse),
        (status = 502, description = "PayPal error", body = ApiErrorResponse),
    ),
)]
pub async fn paypal_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    if order_id.len() < 10 {
        return Err(ApiError::BadRequest("Invalid PayPal order ID".into()));
    }

    Ok(Json(PaymentService::paypal_order_status(&state, &order_id).await?))
}
