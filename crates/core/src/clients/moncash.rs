use lakay_primitives::error::ApiError;
use lakay_primitives::models::moncash::{
    MonCashCheckout, MonCashCreatePaymentRequest, MonCashCreatePaymentResponse, MonCashPayment,
    MonCashRetrieveTransactionRequest, MonCashRetrieveTransactionResponse, MonCashTokenResponse,
};
use lakay_primitives::money::MINOR_PER_MAJOR;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::warn;

const MONCASH_TIMEOUT: Duration = Duration::from_secs(5);

/// Digicel MonCash button API: token, payment creation and transaction lookup.
#[derive(Clone)]
pub struct MonCashClient {
    http: Client,
    api_url: String,
    gateway_url: String,
    client_id: String,
    secret: SecretString,
}

impl MonCashClient {
    pub fn new(
        http: Client,
        api_url: &str,
        gateway_url: &str,
        client_id: &str,
        secret: SecretString,
    ) -> Result<Self, ApiError> {
        Url::parse(api_url).map_err(|_| ApiError::Internal("Invalid MonCash API URL".into()))?;
        Url::parse(gateway_url)
            .map_err(|_| ApiError::Internal("Invalid MonCash gateway URL".into()))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            secret,
        })
    }

    async fn access_token(&self) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(format!("{}/oauth/token", self.api_url))
            .basic_auth(&self.client_id, Some(self.secret.expose_secret()))
            .header("Accept", "application/json")
            .form(&[("scope", "read,write"), ("grant_type", "client_credentials")])
            .timeout(MONCASH_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("MonCash auth request failed: {}", e)))?;

        if !resp.status().is_success() {
            warn!(http_status = resp.status().as_u16(), "MonCash authentication failed");
            return Err(ApiError::Payment("MonCash authentication failed".into()));
        }

        let token = resp
            .json::<MonCashTokenResponse>()
            .await
            .map_err(|_| ApiError::Payment("Invalid MonCash token response".into()))?;

        Ok(token.access_token)
    }

    /// Registers a payment of `amount` HTG centimes under `order_id` and
    /// returns the gateway URL the payer is sent to.
    pub async fn create_payment(&self, order_id: &str, amount: i64) -> Result<MonCashCheckout, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(format!("{}/v1/CreatePayment", self.api_url))
            .bearer_auth(token)
            .json(&MonCashCreatePaymentRequest {
                amount: amount as f64 / MINOR_PER_MAJOR as f64,
                order_id,
            })
            .timeout(MONCASH_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("MonCash request failed: {}", e)))?;

        let status = resp.status();
        let body = resp
            .json::<MonCashCreatePaymentResponse>()
            .await
            .map_err(|_| ApiError::Payment("Invalid MonCash response".into()))?;

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                message = body.message.as_deref().unwrap_or_default(),
                "MonCash payment creation rejected"
            );
            return Err(ApiError::Payment(
                body.message
                    .unwrap_or_else(|| "MonCash payment creation failed".into()),
            ));
        }

        let payment_token = body
            .payment_token
            .map(|t| t.token)
            .ok_or_else(|| ApiError::Payment("Missing MonCash payment token".into()))?;

        let mut redirect = Url::parse(&format!("{}/Payment/Redirect", self.gateway_url))
            .map_err(|_| ApiError::Internal("Invalid MonCash gateway URL".into()))?;
        redirect
            .query_pairs_mut()
            .append_pair("token", &payment_token);

        Ok(MonCashCheckout {
            payment_token,
            redirect_url: redirect.to_string(),
        })
    }

    pub async fn retrieve_transaction(&self, transaction_id: &str) -> Result<MonCashPayment, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(format!("{}/v1/RetrieveTransactionPayment", self.api_url))
            .bearer_auth(token)
            .json(&MonCashRetrieveTransactionRequest { transaction_id })
            .timeout(MONCASH_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("MonCash lookup failed: {}", e)))?;

        if !resp.status().is_success() {
            warn!(
                http_status = resp.status().as_u16(),
                transaction_id, "MonCash transaction lookup rejected"
            );
            return Err(ApiError::Payment("MonCash transaction not found".into()));
        }

        let body = resp
            .json::<MonCashRetrieveTransactionResponse>()
            .await
            .map_err(|_| ApiError::Payment("Invalid MonCash transaction response".into()))?;

        body.payment.ok_or_else(|| {
            ApiError::Payment(
                body.message
                    .unwrap_or_else(|| "MonCash transaction missing".into()),
            )
        })
    }
}
