//! Overdraft check.

use rust_decimal::Decimal;

/// Decides whether a withdrawal fits within balance plus overdraft.
pub struct OverdraftProtection;

impl OverdraftProtection {
    /// `amount > 0 && balance + overdraft_limit >= amount`.
    ///
    /// A `balance + overdraft_limit` past `Decimal::MAX` covers any amount.
    #[must_use]
    pub fn can_withdraw(amount: Decimal, balance: Decimal, overdraft_limit: Decimal) -> bool {
        amount > Decimal::ZERO
            && balance
                .checked_add(overdraft_limit)
                .is_none_or(|available| available >= amount)
    }
}
