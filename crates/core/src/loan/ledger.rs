//! Loan ledger: at most one active loan per account.

use std::collections::HashMap;

use rust_decimal::Decimal;
use teller_shared::AccountId;

use super::error::LoanError;
use super::model::Loan;

/// Result of applying a repayment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repayment {
    /// Outstanding amount after the payment (zero or negative once settled).
    pub outstanding: Decimal,
    /// True if the payment settled the loan and it was removed.
    pub settled: bool,
}

/// Active loans keyed by account.
#[derive(Debug, Clone, Default)]
pub struct LoanLedger {
    loans: HashMap<AccountId, Loan>,
}

impl LoanLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Originates a loan for `account_id`.
    ///
    /// # Errors
    ///
    /// `ExistingLoan` if the account already has one; otherwise any term
    /// validation error from [`Loan::new`].
    pub fn apply_for_loan(
        &mut self,
        account_id: impl Into<AccountId>,
        principal: Decimal,
        interest_rate: Decimal,
        tenure_months: u32,
    ) -> Result<&Loan, LoanError> {
        let account_id = account_id.into();
        if self.loans.contains_key(&account_id) {
            tracing::warn!(account = %account_id, "loan application rejected: existing loan");
            return Err(LoanError::ExistingLoan(account_id));
        }

        let loan = Loan::new(account_id.clone(), principal, interest_rate, tenure_months)?;
        tracing::info!(
            account = %account_id,
            %principal,
            %interest_rate,
            tenure_months,
            outstanding = %loan.outstanding_amount(),
            "loan originated"
        );
        Ok(self.loans.entry(account_id).or_insert(loan))
    }

    /// Applies `payment` to the account's loan, removing the loan once
    /// nothing is outstanding.
    ///
    /// # Errors
    ///
    /// `NoActiveLoan` if the account has no loan, `NonPositiveRepayment` if
    /// `payment <= 0`.
    pub fn repay_loan(
        &mut self,
        account_id: &str,
        payment: Decimal,
    ) -> Result<Repayment, LoanError> {
        let loan = self
            .loans
            .get_mut(account_id)
            .ok_or_else(|| LoanError::NoActiveLoan(AccountId::new(account_id)))?;

        loan.repay(payment)?;
        let outstanding = loan.outstanding_amount();
        let settled = loan.is_settled();

        if settled {
            self.loans.remove(account_id);
            tracing::info!(account = account_id, %payment, "loan settled and removed");
        } else {
            tracing::info!(account = account_id, %payment, %outstanding, "loan repayment applied");
        }

        Ok(Repayment {
            outstanding,
            settled,
        })
    }

    /// Returns the active loan for `account_id`, if any.
    #[must_use]
    pub fn loan_details(&self, account_id: &str) -> Option<&Loan> {
        self.loans.get(account_id)
    }

    /// Number of active loans.
    #[must_use]
    pub fn active_loans(&self) -> usize {
        self.loans.len()
    }
}
