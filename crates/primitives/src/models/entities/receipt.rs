use crate::models::enum_types::{CurrencyCode, PaymentState, TransferType};
use crate::models::payment_method::PaymentMethodId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Receipt {
    pub reference: Uuid,
    pub transfer_type: TransferType,
    pub amount: String,
    pub fee: String,
    pub total: String,
    pub send_currency: CurrencyCode,
    pub receive_amount: String,
    pub receive_currency: CurrencyCode,
    pub exchange_rate: f64,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub payment_method: PaymentMethodId,
    pub payment_state: PaymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_reference: Option<String>,
    pub issued_at: DateTime<Utc>,
}
