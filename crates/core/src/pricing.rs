use lakay_primitives::error::ApiError;
use lakay_primitives::fees::{FeeSchedule, Quote};
use lakay_primitives::models::enum_types::TransferType;
use lakay_primitives::models::quote_dto::RateSource;
use lakay_primitives::money::parse_amount;

/// Fee schedule plus the USD->HTG rate in effect for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pricing {
    pub schedule: FeeSchedule,
    pub usd_htg_rate_scaled: i64,
    pub source: RateSource,
}

impl Pricing {
    pub fn fixed(schedule: FeeSchedule, usd_htg_rate_scaled: i64) -> Self {
        Self {
            schedule,
            usd_htg_rate_scaled,
            source: RateSource::Fixed,
        }
    }

    pub fn quote(&self, transfer_type: TransferType, amount: &str) -> Result<Quote, ApiError> {
        let amount = parse_amount(amount)?;
        self.quote_minor(transfer_type, amount)
    }

    pub fn quote_minor(&self, transfer_type: TransferType, amount: i64) -> Result<Quote, ApiError> {
        self.schedule
            .quote(transfer_type, amount, self.usd_htg_rate_scaled)
    }
}
