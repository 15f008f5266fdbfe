use crate::models::dtos::quote_dto::QuoteResponse;
use crate::models::enum_types::{PaymentState, TransferType, WizardStep};
use crate::models::payment_method::PaymentMethodId;
use crate::models::receipt::Receipt;
use crate::models::transfer::{ReceiverDetails, TransferData};
use crate::utility::validate_phone_number;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateAmountRequest {
    #[validate(length(max = 32))]
    pub amount: String,
    pub transfer_type: Option<TransferType>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateRecipientRequest {
    #[validate(length(max = 64))]
    pub first_name: String,
    #[validate(length(max = 64))]
    pub last_name: String,
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
    #[validate(length(max = 64))]
    pub department: String,
    #[validate(length(max = 64))]
    pub commune: String,
    #[validate(email)]
    pub email: Option<String>,
}

impl From<UpdateRecipientRequest> for ReceiverDetails {
    fn from(req: UpdateRecipientRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            department: req.department,
            commune: req.commune,
            email: req.email.filter(|e| !e.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SelectPaymentMethodRequest {
    pub payment_method: PaymentMethodId,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransferSessionResponse {
    pub id: Uuid,
    pub step: WizardStep,
    pub step_number: u8,
    pub data: TransferData,
    pub can_advance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteResponse>,
    pub payment_state: PaymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransitionResponse {
    /// `false` when the step's requirements were not met and nothing changed.
    pub moved: bool,
    pub session: TransferSessionResponse,
}
