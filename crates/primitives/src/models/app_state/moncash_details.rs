use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct MonCashInfo {
    pub moncash_client_id: String,
    pub moncash_secret: SecretString,
    /// REST base, e.g. `https://sandbox.moncashbutton.digicelgroup.com/Api`.
    pub moncash_api_url: String,
    /// Where payers are redirected to approve a payment.
    pub moncash_gateway_url: String,
}

impl MonCashInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            moncash_client_id: env::var("MONCASH_CLIENT_ID")
                .map_err(|_| eyre!("MONCASH_CLIENT_ID must be set"))?,

            moncash_secret: SecretString::from(
                env::var("MONCASH_SECRET").map_err(|_| eyre!("MONCASH_SECRET must be set"))?,
            ),
            moncash_api_url: env::var("MONCASH_API_URL")
                .unwrap_or_else(|_| "https://sandbox.moncashbutton.digicelgroup.com/Api".into()),
            moncash_gateway_url: env::var("MONCASH_GATEWAY_URL").unwrap_or_else(|_| {
                "https://sandbox.moncashbutton.digicelgroup.com/Moncash-middleware".into()
            }),
        })
    }
}
