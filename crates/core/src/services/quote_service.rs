pub use crate::app_state::AppState;
use crate::pricing::Pricing;
pub use lakay_primitives::{
    error::ApiError,
    models::{
        enum_types::CurrencyCode,
        quote_dto::{ExchangeRateResponse, QuoteRequest, QuoteResponse, RateSource},
    },
};
use lakay_primitives::money::unscale_rate;
use tracing::warn;

pub struct QuoteService;

impl QuoteService {
    /// Pricing in effect right now. A configured live FX source wins; when it
    /// fails or answers nonsense the fixed rate is used instead.
    pub async fn pricing(state: &AppState) -> Pricing {
        let fees = &state.config.fee_details;
        let fixed = Pricing::fixed(fees.schedule.clone(), fees.usd_htg_rate_scaled);

        let Some(fx) = &state.fx else {
            return fixed;
        };

        match fx.usd_to_htg().await {
            Ok(usd_htg_rate_scaled) => Pricing {
                usd_htg_rate_scaled,
                source: RateSource::Live,
                ..fixed
            },
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Live FX unavailable, using fixed rate");
                fixed
            }
        }
    }

    pub async fn quote(state: &AppState, req: QuoteRequest) -> Result<QuoteResponse, ApiError> {
        let pricing = Self::pricing(state).await;
        let quote = pricing.quote(req.transfer_type, &req.amount)?;

        Ok(quote.into())
    }

    pub async fn exchange_rate(state: &AppState) -> ExchangeRateResponse {
        let pricing = Self::pricing(state).await;

        ExchangeRateResponse {
            from: CurrencyCode::USD,
            to: CurrencyCode::HTG,
            rate: unscale_rate(pricing.usd_htg_rate_scaled),
            source: pricing.source,
        }
    }
}
