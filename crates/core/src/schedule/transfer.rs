//! A pending, date-triggered transfer.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use teller_shared::AccountId;

/// Transfer waiting for its execution date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransfer {
    /// Source account.
    pub from_account: AccountId,
    /// Target account.
    pub to_account: AccountId,
    /// Amount; the sign is not validated.
    pub amount: Decimal,
    /// Date the transfer becomes due.
    pub date: NaiveDate,
}

impl ScheduledTransfer {
    /// Creates a transfer.
    #[must_use]
    pub fn new(
        from_account: impl Into<AccountId>,
        to_account: impl Into<AccountId>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            amount,
            date,
        }
    }

    /// Returns true if the transfer is due on exactly `today`.
    #[must_use]
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

impl fmt::Display for ScheduledTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer from {} to {} of {} on {}",
            self.from_account, self.to_account, self.amount, self.date
        )
    }
}
