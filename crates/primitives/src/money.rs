//! Decimal-string amounts and their minor-unit (cents / centimes) form.

use crate::error::ApiError;

pub const MINOR_PER_MAJOR: i64 = 100;

/// Parses a user-entered decimal string like `"100"`, `"100.5"` or `"100.50"`
/// into minor units. Signs, exponents, separators and more than two
/// fractional digits are rejected.
pub fn parse_amount(input: &str) -> Result<i64, ApiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest("Amount is required".into()));
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    let invalid = || ApiError::BadRequest(format!("Invalid amount: {}", input));

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > 2 {
        return Err(ApiError::BadRequest(
            "Amount supports at most two decimal places".into(),
        ));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole_units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };

    let fraction_units: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    whole_units
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|v| v.checked_add(fraction_units))
        .ok_or_else(|| ApiError::BadRequest("Amount is too large".into()))
}

/// Formats minor units with exactly two decimals, e.g. `11500` -> `"115.00"`.
pub fn format_minor(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        abs / MINOR_PER_MAJOR as u64,
        abs % MINOR_PER_MAJOR as u64
    )
}

/// Multiplies minor units by a rate scaled by `RATE_SCALE`, rounding half up.
/// `None` when the converted amount does not fit in minor units.
pub fn apply_rate(amount: i64, rate_scaled: i64) -> Option<i64> {
    let product = i128::from(amount) * i128::from(rate_scaled);
    let half = i128::from(RATE_SCALE) / 2;
    i64::try_from((product + half) / i128::from(RATE_SCALE)).ok()
}

pub const RATE_SCALE: i64 = 1_000_000;

pub fn scale_rate(rate: f64) -> i64 {
    (rate * RATE_SCALE as f64).round() as i64
}

pub fn unscale_rate(rate_scaled: i64) -> f64 {
    rate_scaled as f64 / RATE_SCALE as f64
}
