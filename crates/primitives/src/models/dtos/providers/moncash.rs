use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MonCashTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonCashCreatePaymentRequest<'a> {
    pub amount: f64,
    pub order_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MonCashPaymentToken {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct MonCashCreatePaymentResponse {
    pub payment_token: Option<MonCashPaymentToken>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonCashRetrieveTransactionRequest<'a> {
    pub transaction_id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonCashPayment {
    pub reference: String,
    pub transaction_id: String,
    pub cost: f64,
    pub message: String,
    #[serde(default)]
    pub payer: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonCashRetrieveTransactionResponse {
    pub payment: Option<MonCashPayment>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonCashCheckout {
    pub payment_token: String,
    pub redirect_url: String,
}
