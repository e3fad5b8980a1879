//! Pure conversion between display prices and on-chain micro-unit amounts.
//!
//! All math uses `rust_decimal::Decimal`. No async, no network calls.
//!
//! On-chain amounts are integer strings scaled by `10^6` (`uusd` is one
//! micro-USD). Both directions truncate toward zero, so a round trip is only
//! exact to `10^-6` — callers displaying a stored amount must accept that.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use thiserror::Error;

/// Minor-unit scale: one display unit is `10^6` micro units.
pub const MICRO_SCALE: u32 = 6;

/// Errors from price scaling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must not be negative, got {0}")]
    Negative(String),

    #[error("Amount {0} does not fit in u128")]
    Overflow(String),

    #[error("Invalid micro amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },
}

/// Convert a display price into an integer micro-unit amount string.
///
/// Truncates toward zero: `to_micro(1.9999999) == "1999999"`.
pub fn to_micro(price: Decimal) -> Result<String, PriceError> {
    if price < Decimal::ZERO {
        return Err(PriceError::Negative(price.to_string()));
    }
    let scaled = price
        .checked_mul(Decimal::from(10u64.pow(MICRO_SCALE)))
        .ok_or_else(|| PriceError::Overflow(price.to_string()))?
        .trunc();
    let amount = scaled
        .to_u128()
        .ok_or_else(|| PriceError::Overflow(scaled.to_string()))?;
    Ok(amount.to_string())
}

/// Convert an integer micro-unit amount string back to a display price.
pub fn from_micro(amount: &str) -> Result<Decimal, PriceError> {
    let micro = amount
        .parse::<u128>()
        .map_err(|e| PriceError::InvalidAmount {
            input: amount.to_string(),
            reason: e.to_string(),
        })?;
    let value = Decimal::from_u128(micro).ok_or_else(|| PriceError::Overflow(amount.to_string()))?;
    value
        .checked_div(Decimal::from(10u64.pow(MICRO_SCALE)))
        .ok_or_else(|| PriceError::Overflow(amount.to_string()))
}
