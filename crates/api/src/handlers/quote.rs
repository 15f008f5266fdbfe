use axum::extract::{Json, State};
use lakay_core::services::quote_service::{
    ApiError, AppState, ExchangeRateResponse, QuoteRequest, QuoteResponse, QuoteService,
};
use lakay_primitives::error::ApiErrorResponse;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/quote",
    tag = "Quote",
    summary = "Quote a transfer",
    description = "Computes fee, total and the amount the recipient gets. International transfers pay \
                   $15 for every started $100 and are converted to HTG; national transfers use the \
                   configured HTG fee schedule.",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Quote", body = QuoteResponse),
        (status = 400, description = "Amount missing, malformed or not positive", body = ApiErrorResponse),
    ),
)]
pub async fn quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let quote = QuoteService::quote(&state, req).await?;
    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/exchange-rate",
    tag = "Quote",
    summary = "Current USD to HTG rate",
    description = "Returns the rate used for international quotes and whether it came from the \
                   live FX source or the fixed fallback.",
    responses(
        (status = 200, description = "Exchange rate", body = ExchangeRateResponse),
    ),
)]
pub async fn exchange_rate(State(state): State<Arc<AppState>>) -> Json<ExchangeRateResponse> {
    Json(QuoteService::exchange_rate(&state).await)
}
