//! Loan error types.

use rust_decimal::Decimal;
use teller_shared::AccountId;
use thiserror::Error;

/// Errors that can occur during loan operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    /// The account already has an active loan.
    #[error("Existing loan detected for account {0}. Repay before applying for a new loan.")]
    ExistingLoan(AccountId),

    /// The account has no active loan.
    #[error("No active loan for account {0}")]
    NoActiveLoan(AccountId),

    /// Repayment amount must be positive.
    #[error("Repayment amount must be positive, got {0}")]
    NonPositiveRepayment(Decimal),

    /// Principal must be positive.
    #[error("Loan principal must be positive, got {0}")]
    InvalidPrincipal(Decimal),

    /// Interest rate cannot be negative.
    #[error("Interest rate cannot be negative, got {0}")]
    InvalidRate(Decimal),

    /// Tenure must be at least one month.
    #[error("Loan tenure must be at least one month")]
    InvalidTenure,

    /// The amount owed does not fit in a `Decimal`.
    #[error("Loan amount exceeds the supported range")]
    AmountOverflow,
}

impl LoanError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ExistingLoan(_) => "EXISTING_LOAN",
            Self::NoActiveLoan(_) => "NO_ACTIVE_LOAN",
            Self::NonPositiveRepayment(_) => "NON_POSITIVE_REPAYMENT",
            Self::InvalidPrincipal(_) => "INVALID_PRINCIPAL",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::InvalidTenure => "INVALID_TENURE",
            Self::AmountOverflow => "LOAN_AMOUNT_OVERFLOW",
        }
    }
}
