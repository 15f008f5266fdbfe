use crate::fees::{FeeSchedule, NationalFeeSchedule};
use crate::money::scale_rate;
use eyre::{eyre, Report};
use std::env;

pub const DEFAULT_USD_HTG_RATE: f64 = 127.5;

#[derive(Debug, Clone)]
pub struct FeeInfo {
    pub schedule: FeeSchedule,
    /// Fixed USD to HTG rate, scaled by `money::RATE_SCALE`.
    pub usd_htg_rate_scaled: i64,
    /// Optional live FX source; the fixed rate is used when unset or unreachable.
    pub exchange_api_url: Option<String>,
}

impl Default for FeeInfo {
    fn default() -> Self {
        Self {
            schedule: FeeSchedule::default(),
            usd_htg_rate_scaled: scale_rate(DEFAULT_USD_HTG_RATE),
            exchange_api_url: None,
        }
    }
}

impl FeeInfo {
    pub fn new() -> Result<Self, Report> {
        let rate: f64 = env::var("USD_HTG_RATE")
            .unwrap_or_else(|_| DEFAULT_USD_HTG_RATE.to_string())
            .parse()?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(eyre!("USD_HTG_RATE must be a positive number, got {}", rate));
        }

        let mut national: NationalFeeSchedule = env::var("NATIONAL_FEE_SCHEDULE")
            .unwrap_or_else(|_| "tiered".into())
            .parse()
            .map_err(|e: String| eyre!(e))?;

        if let NationalFeeSchedule::Percent { bps } = &mut national {
            if let Ok(raw) = env::var("NATIONAL_FEE_BPS") {
                *bps = raw.parse()?;
            }
            if !(0..=10_000).contains(bps) {
                return Err(eyre!("NATIONAL_FEE_BPS must be between 0 and 10000, got {}", bps));
            }
        }

        Ok(Self {
            schedule: FeeSchedule {
                national,
                ..FeeSchedule::default()
            },
            usd_htg_rate_scaled: scale_rate(rate),
            exchange_api_url: env::var("EXCHANGE_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}
