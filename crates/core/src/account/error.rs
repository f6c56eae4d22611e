//! Account error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The supplied PIN does not match.
    #[error("Incorrect PIN")]
    AuthenticationFailed,

    /// Amount must be greater than zero.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Not enough funds to cover the withdrawal.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount requested.
        requested: Decimal,
        /// Funds the withdrawal may draw on.
        available: Decimal,
    },

    /// Opening balance is below the account type's minimum.
    #[error("Opening balance {offered} is below the minimum balance {required}")]
    BelowMinimumBalance {
        /// Minimum balance for the account type.
        required: Decimal,
        /// Opening balance offered.
        offered: Decimal,
    },

    /// The resulting balance does not fit in a `Decimal`.
    #[error("Balance would exceed the supported range")]
    Overflow,
}

impl AccountError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "AUTHENTICATION_FAILED",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::BelowMinimumBalance { .. } => "BELOW_MINIMUM_BALANCE",
            Self::Overflow => "BALANCE_OVERFLOW",
        }
    }
}
