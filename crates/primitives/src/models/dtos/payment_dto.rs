use crate::models::enum_types::{CurrencyCode, PaymentProvider, PaymentState, TransferType};
use crate::models::payment_method::{Checkout, PaymentMethod, PaymentMethodId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethodDto {
    pub id: PaymentMethodId,
    pub name: String,
    pub description: String,
    pub fee_label: String,
    pub transfer_type: TransferType,
    pub checkout: Checkout,
}

impl From<&PaymentMethod> for PaymentMethodDto {
    fn from(method: &PaymentMethod) -> Self {
        Self {
            id: method.id,
            name: method.name.to_string(),
            description: method.description.to_string(),
            fee_label: method.fee_label.to_string(),
            transfer_type: method.transfer_type,
            checkout: method.checkout,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaymentMethodsQuery {
    pub transfer_type: Option<TransferType>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentMethodsResponse {
    pub methods: Vec<PaymentMethodDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentsResponse {
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitiatePaymentResponse {
    pub provider: PaymentProvider,
    pub redirect_url: String,
    /// PayPal order id or MonCash payment token.
    pub provider_reference: String,
    pub amount: String,
    pub currency: CurrencyCode,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PayPalCaptureRequest {
    #[validate(length(min = 10, max = 64))]
    pub order_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MonCashReturnQuery {
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentConfirmation {
    pub session_id: uuid::Uuid,
    pub status: PaymentState,
    pub provider_reference: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub status: String,
}
