use lakay_primitives::error::ApiError;
use lakay_primitives::models::catalog_dto::{HeroBanner, Product, ProductImage};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, warn};

const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

/// Read-only client for the hosted PostgREST tables backing the storefront.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
    api_key: SecretString,
}

impl CatalogClient {
    pub fn new(http: Client, base_url: &str, api_key: SecretString) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid catalog base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub async fn products(
        &self,
        category: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Product>, ApiError> {
        let mut params = vec![
            ("select", "*".to_string()),
            ("order", "id.asc".to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(category) = category {
            params.push(("category", format!("eq.{}", category)));
        }

        self.fetch("products", &params).await
    }

    pub async fn product(&self, id: i64) -> Result<Option<Product>, ApiError> {
        let params = [
            ("select", "*".to_string()),
            ("id", format!("eq.{}", id)),
            ("limit", "1".to_string()),
        ];

        let mut rows: Vec<Product> = self.fetch("products", &params).await?;
        Ok(rows.pop())
    }

    pub async fn product_images(&self, product_id: i64) -> Result<Vec<ProductImage>, ApiError> {
        let params = [
            ("select", "*".to_string()),
            ("product_id", format!("eq.{}", product_id)),
            ("order", "position.asc".to_string()),
        ];

        self.fetch("product_images", &params).await
    }

    pub async fn flash_deals(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        let params = [
            ("select", "*".to_string()),
            ("is_flash_deal", "eq.true".to_string()),
            ("order", "flash_deal_ends_at.asc.nullslast".to_string()),
            ("limit", limit.to_string()),
        ];

        self.fetch("products", &params).await
    }

    pub async fn hero_banners(&self) -> Result<Vec<HeroBanner>, ApiError> {
        let params = [
            ("select", "*".to_string()),
            ("order", "position.asc".to_string()),
        ];

        self.fetch("hero_banners", &params).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(table)?;
        let key = self.api_key.expose_secret();

        let resp = self
            .http
            .get(url)
            .header("apikey", key)
            .bearer_auth(key)
            .header("Accept", "application/json")
            .query(params)
            .timeout(CATALOG_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, table, "Failed to reach catalog backend");
                ApiError::Catalog("Catalog service unavailable".into())
            })?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                table,
                response = %body_text.chars().take(200).collect::<String>(),
                "Catalog query failed"
            );
            return Err(ApiError::Catalog("Catalog request failed".into()));
        }

        serde_json::from_str(&body_text).map_err(|e| {
            error!(
                error = %e,
                table,
                response = %body_text.chars().take(200).collect::<String>(),
                "Invalid JSON from catalog backend"
            );
            ApiError::Catalog("Invalid catalog response".into())
        })
    }

    fn endpoint(&self, table: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Internal("Invalid catalog URL path".into()))?
            .pop_if_empty()
            .extend(["rest", "v1", table]);
        Ok(url)
    }
}
