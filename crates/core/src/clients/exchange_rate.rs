use eyre::{eyre, Result, WrapErr};
use lakay_primitives::models::enum_types::CurrencyCode;
use lakay_primitives::models::quote_dto::FxRatesResponse;
use lakay_primitives::money::scale_rate;
use reqwest::{Client, Url};
use std::ops::Range;
use std::time::Duration;

/// Gourdes per dollar outside this band are treated as a broken feed.
pub const PLAUSIBLE_USD_HTG: Range<f64> = 1.0..10_000.0;

/// Live USD/HTG rate from an endpoint shaped like `GET {base}/USD` ->
/// `{"rates": {"HTG": 132.4, ..}}`.
#[derive(Clone)]
pub struct ExchangeRateClient {
    http: Client,
    usd_rates_url: Url,
}

impl ExchangeRateClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self> {
        let mut usd_rates_url =
            Url::parse(base_url).wrap_err_with(|| format!("Invalid EXCHANGE_API_URL: {base_url}"))?;
        usd_rates_url
            .path_segments_mut()
            .map_err(|_| eyre!("EXCHANGE_API_URL cannot take a path: {base_url}"))?
            .pop_if_empty()
            .push(&CurrencyCode::USD.to_string());

        Ok(Self { http, usd_rates_url })
    }

    /// Current rate scaled by `RATE_SCALE`.
    pub async fn usd_to_htg(&self) -> Result<i64> {
        let resp = self
            .http
            .get(self.usd_rates_url.clone())
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .wrap_err("FX endpoint unreachable")?;

        let status = resp.status();
        let body: FxRatesResponse = resp
            .json()
            .await
            .wrap_err_with(|| format!("Unreadable FX response ({status})"))?;

        if !status.is_success() {
            return Err(eyre!(
                "FX endpoint answered {status}: {}",
                body.error.as_deref().unwrap_or("no detail")
            ));
        }

        let rate = body
            .rates
            .get(&CurrencyCode::HTG.to_string())
            .copied()
            .ok_or_else(|| eyre!("FX response has no HTG rate"))?;

        if !PLAUSIBLE_USD_HTG.contains(&rate) {
            return Err(eyre!("Implausible USD/HTG rate {rate}"));
        }

        Ok(scale_rate(rate))
    }
}
