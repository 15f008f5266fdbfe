use crate::models::enum_types::{PaymentProvider, TransferType};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethodId {
    CreditCard,
    BankTransfer,
    Zelle,
    Paypal,
    CashApp,
    Moncash,
    Natcash,
    Unibank,
    Sogebank,
    Bnc,
    CapitalBank,
    Buh,
}

/// How a method is settled once chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "provider", rename_all = "snake_case")]
pub enum Checkout {
    Hosted(PaymentProvider),
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: &'static str,
    pub description: &'static str,
    pub fee_label: &'static str,
    pub transfer_type: TransferType,
    pub checkout: Checkout,
}

impl PaymentMethod {
    pub fn supports(&self, transfer_type: TransferType) -> bool {
        self.transfer_type == transfer_type
    }

    pub fn hosted_provider(&self) -> Option<PaymentProvider> {
        match self.checkout {
            Checkout::Hosted(provider) => Some(provider),
            Checkout::Offline => None,
        }
    }
}

const INTERNATIONAL_FEE_LABEL: &str = "$15 per $100 sent";
const NATIONAL_FEE_LABEL: &str = "Local transfer fee applies";

pub static PAYMENT_METHODS: [PaymentMethod; 12] = [
    PaymentMethod {
        id: PaymentMethodId::CreditCard,
        name: "Credit / Debit Card",
        description: "Visa, Mastercard, American Express",
        fee_label: INTERNATIONAL_FEE_LABEL,
        transfer_type: TransferType::International,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::BankTransfer,
        name: "Bank Transfer",
        description: "ACH transfer from a US bank account",
        fee_label: INTERNATIONAL_FEE_LABEL,
        transfer_type: TransferType::International,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Zelle,
        name: "Zelle",
        description: "Send from your banking app with Zelle",
        fee_label: INTERNATIONAL_FEE_LABEL,
        transfer_type: TransferType::International,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Paypal,
        name: "PayPal",
        description: "Pay with your PayPal balance or linked card",
        fee_label: INTERNATIONAL_FEE_LABEL,
        transfer_type: TransferType::International,
        checkout: Checkout::Hosted(PaymentProvider::Paypal),
    },
    PaymentMethod {
        id: PaymentMethodId::CashApp,
        name: "Cash App",
        description: "Pay with your Cash App balance",
        fee_label: INTERNATIONAL_FEE_LABEL,
        transfer_type: TransferType::International,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Moncash,
        name: "MonCash",
        description: "Digicel mobile wallet",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Hosted(PaymentProvider::Moncash),
    },
    PaymentMethod {
        id: PaymentMethodId::Natcash,
        name: "Natcash",
        description: "Natcom mobile wallet",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Unibank,
        name: "Unibank",
        description: "Deposit at any Unibank branch",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Sogebank,
        name: "Sogebank",
        description: "Deposit at any Sogebank branch",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Bnc,
        name: "BNC",
        description: "Banque Nationale de Crédit",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::CapitalBank,
        name: "Capital Bank",
        description: "Deposit at any Capital Bank branch",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Offline,
    },
    PaymentMethod {
        id: PaymentMethodId::Buh,
        name: "BUH",
        description: "Banque de l'Union Haïtienne",
        fee_label: NATIONAL_FEE_LABEL,
        transfer_type: TransferType::National,
        checkout: Checkout::Offline,
    },
];

impl PaymentMethodId {
    pub fn descriptor(self) -> &'static PaymentMethod {
        // index order mirrors PAYMENT_METHODS
        let index = match self {
            PaymentMethodId::CreditCard => 0,
            PaymentMethodId::BankTransfer => 1,
            PaymentMethodId::Zelle => 2,
            PaymentMethodId::Paypal => 3,
            PaymentMethodId::CashApp => 4,
            PaymentMethodId::Moncash => 5,
            PaymentMethodId::Natcash => 6,
            PaymentMethodId::Unibank => 7,
            PaymentMethodId::Sogebank => 8,
            PaymentMethodId::Bnc => 9,
            PaymentMethodId::CapitalBank => 10,
            PaymentMethodId::Buh => 11,
        };
        &PAYMENT_METHODS[index]
    }
}

pub fn payment_methods_for(transfer_type: TransferType) -> impl Iterator<Item = &'static PaymentMethod> {
    PAYMENT_METHODS
        .iter()
        .filter(move |m| m.supports(transfer_type))
}
