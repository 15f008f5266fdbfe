use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct PayPalTokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PayPalOrderResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct PayPalLink {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Deserialize)]
pub struct PayPalOrderResp {
    pub id: String,
    #[serde(default)]
    pub links: Vec<PayPalLink>,
}

#[derive(Debug, Deserialize)]
pub struct CaptureAmount {
    pub currency_code: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct Capture {
    pub id: String,
    pub status: String,
    pub amount: CaptureAmount,
}

#[derive(Debug, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub captures: Vec<Capture>,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseUnit {
    pub payments: Payments,
}

#[derive(Debug, Deserialize)]
pub struct PayPalCaptureResponse {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaypalCapture {
    pub capture_id: String,
    pub currency: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaypalOrder {
    pub order_id: String,
    pub approval_url: String,
}
