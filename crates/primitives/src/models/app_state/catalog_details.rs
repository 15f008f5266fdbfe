use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

/// Hosted PostgREST backend holding products, images and banners.
#[derive(Debug, Clone)]
pub struct CatalogInfo {
    pub catalog_api_url: String,
    pub catalog_api_key: SecretString,
}

impl CatalogInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            catalog_api_url: env::var("CATALOG_API_URL")
                .map_err(|_| eyre!("CATALOG_API_URL must be set"))?,
            catalog_api_key: SecretString::from(
                env::var("CATALOG_API_KEY").map_err(|_| eyre!("CATALOG_API_KEY must be set"))?,
            ),
        })
    }
}
