//! Bank-level error types.

use teller_shared::{AccountId, AppError};
use thiserror::Error;

use crate::account::AccountError;
use crate::currency::CurrencyError;
use crate::loan::LoanError;
use crate::schedule::ScheduleError;

/// Errors returned by [`super::Bank`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No account with this id.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// An account with this id already exists.
    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountId),

    /// Source and target of a transfer are the same account.
    #[error("Cannot transfer from account {0} to itself")]
    SameAccount(AccountId),

    /// Account operation failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Loan operation failed.
    #[error(transparent)]
    Loan(#[from] LoanError),

    /// Scheduling failed.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Currency lookup or update failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

impl BankError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::DuplicateAccount(_) => "DUPLICATE_ACCOUNT",
            Self::SameAccount(_) => "SAME_ACCOUNT",
            Self::Account(e) => e.error_code(),
            Self::Loan(e) => e.error_code(),
            Self::Schedule(e) => e.error_code(),
            Self::Currency(e) => e.error_code(),
        }
    }
}

impl From<BankError> for AppError {
    fn from(e: BankError) -> Self {
        let message = e.to_string();
        match e {
            BankError::AccountNotFound(_) | BankError::Loan(LoanError::NoActiveLoan(_)) => {
                Self::NotFound(message)
            }
            BankError::DuplicateAccount(_) | BankError::Loan(LoanError::ExistingLoan(_)) => {
                Self::Conflict(message)
            }
            BankError::Account(AccountError::AuthenticationFailed) => Self::Unauthorized(message),
            BankError::Account(
                AccountError::InsufficientFunds { .. }
                | AccountError::BelowMinimumBalance { .. }
                | AccountError::Overflow,
            ) => Self::BusinessRule(message),
            BankError::SameAccount(_)
            | BankError::Account(AccountError::NonPositiveAmount(_))
            | BankError::Loan(_)
            | BankError::Schedule(_)
            | BankError::Currency(_) => Self::Validation(message),
        }
    }
}
