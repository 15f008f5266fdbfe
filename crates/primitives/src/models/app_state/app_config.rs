use crate::models::app_state::catalog_details::CatalogInfo;
use crate::models::app_state::fee_details::FeeInfo;
use crate::models::app_state::moncash_details::MonCashInfo;
use crate::models::app_state::paypal_details::PaypalInfo;
use crate::models::app_state::session_details::SessionInfo;
use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_url: String,

    pub app_env: String,

    pub fee_details: FeeInfo,

    pub session_details: SessionInfo,

    pub paypal_details: PaypalInfo,

    pub moncash_details: MonCashInfo,

    pub catalog_details: CatalogInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),

            fee_details: FeeInfo::new()?,

            session_details: SessionInfo::new()?,

            paypal_details: PaypalInfo::new()?,

            moncash_details: MonCashInfo::new()?,

            catalog_details: CatalogInfo::new()?,
        })
    }

    pub fn is_test(&self) -> bool {
        self.app_env == "test"
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
