//! A single simple-interest loan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use teller_shared::AccountId;

use super::error::LoanError;

const MONTHS_IN_YEAR: u32 = 12;

/// A loan whose interest is capitalized up front.
///
/// The outstanding amount starts at `principal × (1 + rate × tenure / 12)`
/// and only moves through [`Loan::repay`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    account_id: AccountId,
    principal: Decimal,
    interest_rate: Decimal,
    tenure_months: u32,
    outstanding: Decimal,
}

impl Loan {
    /// Creates a loan with interest capitalized for the full tenure.
    ///
    /// # Errors
    ///
    /// `InvalidPrincipal` if `principal <= 0`, `InvalidRate` if
    /// `interest_rate < 0`, `InvalidTenure` if `tenure_months == 0`,
    /// `AmountOverflow` if the total payable does not fit in a `Decimal`.
    pub fn new(
        account_id: AccountId,
        principal: Decimal,
        interest_rate: Decimal,
        tenure_months: u32,
    ) -> Result<Self, LoanError> {
        if principal <= Decimal::ZERO {
            return Err(LoanError::InvalidPrincipal(principal));
        }
        if interest_rate < Decimal::ZERO {
            return Err(LoanError::InvalidRate(interest_rate));
        }
        if tenure_months == 0 {
            return Err(LoanError::InvalidTenure);
        }

        Ok(Self {
            account_id,
            principal,
            interest_rate,
            tenure_months,
            outstanding: Self::total_payable(principal, interest_rate, tenure_months)
                .ok_or(LoanError::AmountOverflow)?,
        })
    }

    /// Principal plus simple interest over the tenure:
    /// `principal + principal × rate × tenure / 12`.
    ///
    /// `None` if any step overflows.
    #[must_use]
    pub fn total_payable(
        principal: Decimal,
        interest_rate: Decimal,
        tenure_months: u32,
    ) -> Option<Decimal> {
        principal
            .checked_mul(interest_rate)?
            .checked_mul(Decimal::from(tenure_months))?
            .checked_div(Decimal::from(MONTHS_IN_YEAR))?
            .checked_add(principal)
    }

    /// Reduces the outstanding amount by exactly `amount`.
    ///
    /// Overpayment drives the outstanding amount negative; nothing is refunded.
    ///
    /// # Errors
    ///
    /// `NonPositiveRepayment` if `amount <= 0`, `AmountOverflow` if the
    /// new outstanding amount does not fit in a `Decimal`.
    pub fn repay(&mut self, amount: Decimal) -> Result<(), LoanError> {
        if amount <= Decimal::ZERO {
            return Err(LoanError::NonPositiveRepayment(amount));
        }
        self.outstanding = self
            .outstanding
            .checked_sub(amount)
            .ok_or(LoanError::AmountOverflow)?;
        Ok(())
    }

    /// Returns true once nothing remains to be paid.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outstanding <= Decimal::ZERO
    }

    /// Returns the owning account.
    #[must_use]
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the principal.
    #[must_use]
    pub fn principal(&self) -> Decimal {
        self.principal
    }

    /// Returns the annual interest rate as a fraction.
    #[must_use]
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Returns the tenure in months.
    #[must_use]
    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    /// Returns the amount still owed.
    #[must_use]
    pub fn outstanding_amount(&self) -> Decimal {
        self.outstanding
    }
}
