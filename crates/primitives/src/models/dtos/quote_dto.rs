use crate::fees::Quote;
use crate::models::enum_types::{CurrencyCode, TransferType};
use crate::money::{format_minor, unscale_rate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1, max = 32))]
    pub amount: String,
    #[serde(default)]
    pub transfer_type: TransferType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    pub transfer_type: TransferType,
    pub amount: String,
    pub fee: String,
    pub total: String,
    pub send_currency: CurrencyCode,
    pub receive_amount: String,
    pub receive_currency: CurrencyCode,
    pub exchange_rate: f64,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            transfer_type: quote.transfer_type,
            amount: format_minor(quote.amount),
            fee: format_minor(quote.fee),
            total: format_minor(quote.total),
            send_currency: quote.send_currency,
            receive_amount: format_minor(quote.receive_amount),
            receive_currency: quote.receive_currency,
            exchange_rate: unscale_rate(quote.exchange_rate_scaled),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    Fixed,
    Live,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExchangeRateResponse {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: f64,
    pub source: RateSource,
}

/// Body returned by the live FX endpoint.
#[derive(Debug, Deserialize)]
pub struct FxRatesResponse {
    #[serde(default)]
    pub rates: std::collections::HashMap<String, f64>,
    pub error: Option<String>,
}
