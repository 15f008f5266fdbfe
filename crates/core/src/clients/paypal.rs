use lakay_primitives::error::ApiError;
use lakay_primitives::models::enum_types::CurrencyCode;
use lakay_primitives::models::paypal::{
    PayPalCaptureResponse, PayPalOrderResp, PayPalOrderResponse, PayPalTokenResponse,
    PaypalCapture, PaypalOrder,
};
use lakay_primitives::money::format_minor;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::time::Duration;
use tracing::{error, warn};
use uuid::Uuid;

const PAYPAL_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct PayPalClient {
    http: Client,
    base_url: String,
    client_id: String,
    secret: SecretString,
}

impl PayPalClient {
    pub fn new(http: Client, base_url: &str, client_id: &str, secret: SecretString) -> Result<Self, ApiError> {
        reqwest::Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid PayPal base URL".into()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            secret,
        })
    }

    async fn access_token(&self) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(&self.client_id, Some(self.secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .timeout(PAYPAL_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("PayPal auth request failed: {}", e)))?;

        if !resp.status().is_success() {
            warn!(http_status = resp.status().as_u16(), "PayPal authentication failed");
            return Err(ApiError::Payment("PayPal authentication failed".into()));
        }

        let token = resp
            .json::<PayPalTokenResponse>()
            .await
            .map_err(|_| ApiError::Payment("Invalid PayPal token response".into()))?;

        Ok(token.access_token)
    }

    /// Creates a CAPTURE order for `amount` minor units and returns the
    /// approval link the payer must visit.
    pub async fn create_order(
        &self,
        reference: Uuid,
        amount: i64,
        currency: CurrencyCode,
        return_url: &str,
        cancel_url: &str,
    ) -> Result<PaypalOrder, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(format!("{}/v2/checkout/orders", self.base_url))
            .bearer_auth(token)
            .json(&json!({
                "intent": "CAPTURE",
                "purchase_units": [{
                    "reference_id": reference.to_string(),
                    "amount": {
                        "currency_code": currency.to_string(),
                        "value": format_minor(amount)
                    }
                }],
                "application_context": {
                    "return_url": return_url,
                    "cancel_url": cancel_url
                }
            }))
            .timeout(PAYPAL_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("PayPal request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            warn!(
                http_status = status.as_u16(),
                response = %body.chars().take(200).collect::<String>(),
                "PayPal order creation rejected"
            );
            return Err(ApiError::Payment("PayPal order creation failed".into()));
        }

        let order = resp
            .json::<PayPalOrderResp>()
            .await
            .map_err(|_| ApiError::Payment("Invalid PayPal response".into()))?;

        let approval_url = order
            .links
            .iter()
            .find(|l| l.rel == "approve" || l.rel == "payer-action")
            .map(|l| l.href.clone())
            .ok_or_else(|| {
                error!(order_id = %order.id, "PayPal approval link missing");
                ApiError::Payment("PayPal approval link missing".into())
            })?;

        Ok(PaypalOrder {
            order_id: order.id,
            approval_url,
        })
    }

    pub async fn capture_order(&self, order_id: &str) -> Result<PaypalCapture, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(format!("{}/v2/checkout/orders/{}/capture", self.base_url, order_id))
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .timeout(PAYPAL_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("PayPal capture request failed: {}", e)))?;

        if !resp.status().is_success() {
            warn!(
                http_status = resp.status().as_u16(),
                order_id, "PayPal capture rejected"
            );
            return Err(ApiError::Payment("PayPal capture failed".into()));
        }

        let body = resp
            .json::<PayPalCaptureResponse>()
            .await
            .map_err(|_| ApiError::Payment("Invalid PayPal capture response".into()))?;

        if body.status != "COMPLETED" {
            return Err(ApiError::Payment(format!(
                "PayPal order not completed: {}",
                body.status
            )));
        }

        let capture = body
            .purchase_units
            .first()
            .and_then(|unit| unit.payments.captures.first())
            .ok_or_else(|| ApiError::Payment("Missing capture ID".into()))?;

        Ok(PaypalCapture {
            capture_id: capture.id.clone(),
            currency: capture.amount.currency_code.clone(),
            value: capture.amount.value.clone(),
        })
    }

    pub async fn order_status(&self, order_id: &str) -> Result<String, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .get(format!("{}/v2/checkout/orders/{}", self.base_url, order_id))
            .bearer_auth(token)
            .timeout(PAYPAL_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Payment(format!("PayPal order request failed: {}", e)))?;

        if !resp.status().is_success() {
            return Err(ApiError::Payment("Failed to fetch PayPal order".into()));
        }

        let order = resp
            .json::<PayPalOrderResponse>()
            .await
            .map_err(|_| ApiError::Payment("Invalid PayPal order response".into()))?;

        Ok(order.status)
    }
}
