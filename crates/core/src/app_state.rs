use crate::clients::{CatalogClient, ExchangeRateClient, MonCashClient, PayPalClient};
use crate::events::PaymentEvents;
use crate::sessions::SessionStore;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub use lakay_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: AppConfig,
    pub paypal: PayPalClient,
    pub moncash: MonCashClient,
    pub catalog: CatalogClient,
    pub fx: Option<ExchangeRateClient>,
    pub sessions: SessionStore,
    pub events: PaymentEvents,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let paypal = PayPalClient::new(
            http.clone(),
            &config.paypal_details.paypal_api_url,
            &config.paypal_details.paypal_client_id,
            config.paypal_details.paypal_secret.clone(),
        )?;

        let moncash = MonCashClient::new(
            http.clone(),
            &config.moncash_details.moncash_api_url,
            &config.moncash_details.moncash_gateway_url,
            &config.moncash_details.moncash_client_id,
            config.moncash_details.moncash_secret.clone(),
        )?;

        let catalog = CatalogClient::new(
            http.clone(),
            &config.catalog_details.catalog_api_url,
            config.catalog_details.catalog_api_key.clone(),
        )?;

        let fx = config
            .fee_details
            .exchange_api_url
            .as_deref()
            .map(|url| ExchangeRateClient::new(http.clone(), url))
            .transpose()?;

        Ok(Arc::new(Self {
            http_client: http,
            config,
            paypal,
            moncash,
            catalog,
            fx,
            sessions: SessionStore::new(),
            events: PaymentEvents::default(),
        }))
    }
}
