use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CurrencyCode {
    USD,
    HTG,
}

/// International transfers are sent in USD and received in HTG; national
/// transfers stay in HTG on both sides.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransferType {
    #[default]
    International,
    National,
}

impl TransferType {
    pub fn send_currency(self) -> CurrencyCode {
        match self {
            TransferType::International => CurrencyCode::USD,
            TransferType::National => CurrencyCode::HTG,
        }
    }

    pub fn receive_currency(self) -> CurrencyCode {
        CurrencyCode::HTG
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    AmountEntry,
    RecipientDetails,
    PaymentMethod,
    Receipt,
}

impl WizardStep {
    /// One-based position, always within `1..=4`.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::AmountEntry => 1,
            WizardStep::RecipientDetails => 2,
            WizardStep::PaymentMethod => 3,
            WizardStep::Receipt => 4,
        }
    }

    pub fn following(self) -> Option<WizardStep> {
        match self {
            WizardStep::AmountEntry => Some(WizardStep::RecipientDetails),
            WizardStep::RecipientDetails => Some(WizardStep::PaymentMethod),
            WizardStep::PaymentMethod => Some(WizardStep::Receipt),
            WizardStep::Receipt => None,
        }
    }

    pub fn preceding(self) -> Option<WizardStep> {
        match self {
            WizardStep::AmountEntry => None,
            WizardStep::RecipientDetails => Some(WizardStep::AmountEntry),
            WizardStep::PaymentMethod => Some(WizardStep::RecipientDetails),
            WizardStep::Receipt => Some(WizardStep::PaymentMethod),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentProvider {
    Paypal,
    Moncash,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    #[default]
    NotStarted,
    Pending,
    RequiresAction,
    Completed,
    Failed,
}
