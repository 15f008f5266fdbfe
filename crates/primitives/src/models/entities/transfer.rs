use crate::models::enum_types::TransferType;
use crate::models::payment_method::PaymentMethodId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEPARTMENTS: [&str; 10] = [
    "Artibonite",
    "Centre",
    "Grand'Anse",
    "Nippes",
    "Nord",
    "Nord-Est",
    "Nord-Ouest",
    "Ouest",
    "Sud",
    "Sud-Est",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReceiverDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub department: String,
    pub commune: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ReceiverDetails {
    /// Every required field carries a non-blank value; email is optional.
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.department,
            &self.commune,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// Everything the sender has entered so far in the transfer flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransferData {
    pub transfer_type: TransferType,
    /// Raw decimal string as entered, e.g. `"100.00"`.
    pub amount: String,
    pub receiver_details: ReceiverDetails,
    pub selected_payment_method: Option<PaymentMethodId>,
}
