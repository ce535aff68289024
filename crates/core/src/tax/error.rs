//! Tax calculation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during tax calculation.
///
/// These are validation failures on the numeric inputs; they are always
/// surfaced to the caller and never retried internally.
#[derive(Debug, Error)]
pub enum TaxError {
    /// A monetary amount was negative.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// A tax rate was outside the valid percentage range.
    #[error("Rate for {tax} must be between 0 and 100, got {rate}")]
    RateOutOfRange {
        /// Which tax the rate belongs to.
        tax: &'static str,
        /// The offending rate.
        rate: Decimal,
    },
}

impl TaxError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::RateOutOfRange { .. } => "RATE_OUT_OF_RANGE",
        }
    }
}
