//! Fee schedules and quote arithmetic. All amounts are minor units.

use crate::error::ApiError;
use crate::models::enum_types::{CurrencyCode, TransferType};
use crate::money::{apply_rate, RATE_SCALE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// $15 for every started $100.
pub const INTERNATIONAL_BRACKET: i64 = 100_00;
pub const INTERNATIONAL_FEE_PER_BRACKET: i64 = 15_00;

pub const DEFAULT_NATIONAL_FEE_BPS: i64 = 1_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    /// Inclusive upper bound; `None` covers everything above the previous tier.
    pub up_to: Option<i64>,
    pub fee: i64,
}

pub const DEFAULT_NATIONAL_TIERS: [FeeTier; 4] = [
    FeeTier {
        up_to: Some(1_000_00),
        fee: 65_00,
    },
    FeeTier {
        up_to: Some(5_000_00),
        fee: 115_00,
    },
    FeeTier {
        up_to: Some(10_000_00),
        fee: 185_00,
    },
    FeeTier {
        up_to: None,
        fee: 275_00,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NationalFeeSchedule {
    Percent { bps: i64 },
    Tiered(Vec<FeeTier>),
}

impl Default for NationalFeeSchedule {
    fn default() -> Self {
        NationalFeeSchedule::Tiered(DEFAULT_NATIONAL_TIERS.to_vec())
    }
}

impl NationalFeeSchedule {
    pub fn fee(&self, amount: i64) -> i64 {
        match self {
            NationalFeeSchedule::Percent { bps } => {
                let fee = (i128::from(amount) * i128::from(*bps) + 5_000) / 10_000;
                i64::try_from(fee).unwrap_or(i64::MAX)
            }
            NationalFeeSchedule::Tiered(tiers) => tiers
                .iter()
                .find(|tier| tier.up_to.map_or(true, |limit| amount <= limit))
                .or_else(|| tiers.last())
                .map(|tier| tier.fee)
                .unwrap_or(0),
        }
    }
}

impl FromStr for NationalFeeSchedule {
    type Err = String;

    /// Accepts `tiered` or `percent`; the percent rate comes from
    /// `NATIONAL_FEE_BPS` at config load time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tiered" => Ok(NationalFeeSchedule::default()),
            "percent" => Ok(NationalFeeSchedule::Percent {
                bps: DEFAULT_NATIONAL_FEE_BPS,
            }),
            other => Err(format!("Unknown national fee schedule: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    pub international_bracket: i64,
    pub international_fee_per_bracket: i64,
    pub national: NationalFeeSchedule,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            international_bracket: INTERNATIONAL_BRACKET,
            international_fee_per_bracket: INTERNATIONAL_FEE_PER_BRACKET,
            national: NationalFeeSchedule::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub transfer_type: TransferType,
    pub amount: i64,
    pub fee: i64,
    pub total: i64,
    pub send_currency: CurrencyCode,
    pub receive_amount: i64,
    pub receive_currency: CurrencyCode,
    pub exchange_rate_scaled: i64,
}

impl FeeSchedule {
    pub fn fee(&self, transfer_type: TransferType, amount: i64) -> i64 {
        if amount <= 0 {
            return 0;
        }

        match transfer_type {
            TransferType::International => {
                let started = i64::from(amount % self.international_bracket != 0);
                let brackets = amount / self.international_bracket + started;
                brackets.saturating_mul(self.international_fee_per_bracket)
            }
            TransferType::National => self.national.fee(amount),
        }
    }

    /// `usd_htg_rate_scaled` only applies to international transfers;
    /// national transfers are HTG on both sides.
    pub fn quote(
        &self,
        transfer_type: TransferType,
        amount: i64,
        usd_htg_rate_scaled: i64,
    ) -> Result<Quote, ApiError> {
        if amount <= 0 {
            return Err(ApiError::BadRequest("Amount must be greater than zero".into()));
        }

        let fee = self.fee(transfer_type, amount);
        let total = amount
            .checked_add(fee)
            .ok_or_else(|| ApiError::BadRequest("Amount is too large".into()))?;

        let rate_scaled = match transfer_type {
            TransferType::International => usd_htg_rate_scaled,
            TransferType::National => RATE_SCALE,
        };
        let receive_amount = apply_rate(amount, rate_scaled)
            .ok_or_else(|| ApiError::BadRequest("Amount is too large".into()))?;

        Ok(Quote {
            transfer_type,
            amount,
            fee,
            total,
            send_currency: transfer_type.send_currency(),
            receive_amount,
            receive_currency: transfer_type.receive_currency(),
            exchange_rate_scaled: rate_scaled,
        })
    }
}
