//! Property-based tests for account balance operations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::model::Account;

/// Strategy to generate a valid positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-positive amount (-1,000,000.00 to 0.00).
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A withdrawal followed by a deposit of the same amount restores the balance.
    #[test]
    fn prop_withdraw_then_deposit_restores_balance(
        extra in positive_amount(),
        amount in positive_amount(),
    ) {
        // Balance always covers the withdrawal.
        let opening = amount + extra;
        let mut account = Account::new("P1", opening, "USD", Decimal::ZERO, "1234");

        prop_assert!(account.withdraw(amount, "1234"));
        prop_assert!(account.deposit(amount, "1234"));
        prop_assert_eq!(account.balance(), opening);
    }

    /// Non-positive amounts never change the balance.
    #[test]
    fn prop_non_positive_amounts_rejected(
        opening in positive_amount(),
        amount in non_positive_amount(),
    ) {
        let mut account = Account::new("P1", opening, "USD", Decimal::ZERO, "1234");

        prop_assert!(!account.deposit(amount, "1234"));
        prop_assert!(!account.withdraw(amount, "1234"));
        prop_assert_eq!(account.balance(), opening);
        prop_assert!(account.transaction_history().is_empty());
    }

    /// A wrong PIN never changes the balance.
    #[test]
    fn prop_wrong_pin_rejected(
        opening in positive_amount(),
        amount in positive_amount(),
        pin in "[0-9]{4}",
    ) {
        prop_assume!(pin != "1234");
        let mut account = Account::new("P1", opening, "USD", Decimal::ZERO, "1234");

        prop_assert!(!account.deposit(amount, &pin));
        prop_assert!(!account.withdraw(amount, &pin));
        prop_assert_eq!(account.balance(), opening);
    }

    /// Withdrawals beyond the balance are rejected when the overdraft is ignored.
    #[test]
    fn prop_withdraw_never_overdraws_by_default(
        opening in positive_amount(),
        excess in positive_amount(),
        overdraft in positive_amount(),
    ) {
        let mut account = Account::new("P1", opening, "USD", overdraft, "1234");
        prop_assert!(!account.withdraw(opening + excess, "1234"));
        prop_assert_eq!(account.balance(), opening);
    }

    /// A transfer between accounts sharing a PIN conserves the total.
    #[test]
    fn prop_transfer_conserves_total(
        source_balance in positive_amount(),
        target_balance in positive_amount(),
        amount in positive_amount(),
    ) {
        let mut source = Account::new("S", source_balance, "USD", Decimal::ZERO, "1234");
        let mut target = Account::new("T", target_balance, "USD", Decimal::ZERO, "1234");

        let moved = source.transfer(&mut target, amount, "1234");
        prop_assert_eq!(moved, amount <= source_balance);
        prop_assert_eq!(source.balance() + target.balance(), source_balance + target_balance);
    }
}
