//! Currency error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during currency operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The currency code is not in the rate table.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Exchange rate must be positive.
    #[error("Exchange rate for {code} must be positive, got {rate}")]
    InvalidRate {
        /// Currency code being updated.
        code: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// The converted amount does not fit in a `Decimal`.
    #[error("Converting {amount} from {from} to {to} overflows")]
    Overflow {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// Amount being converted.
        amount: Decimal,
    },
}

impl CurrencyError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::InvalidRate { .. } => "INVALID_EXCHANGE_RATE",
            Self::Overflow { .. } => "CURRENCY_OVERFLOW",
        }
    }
}
