//! Property-based tests for loan bookkeeping.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LoanError;
use super::ledger::LoanLedger;
use super::model::Loan;

/// Strategy to generate a principal (1.00 to 1,000,000.00).
fn principal() -> impl Strategy<Value = Decimal> {
    (100i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an annual rate (0.0000 to 0.5000).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..=5_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate a tenure (1 to 360 months).
fn tenure() -> impl Strategy<Value = u32> {
    1u32..=360
}

/// Strategy mixing the `Decimal` extremes with ordinary principals.
fn extreme_principal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::MAX / Decimal::TWO),
        (1i64..i64::MAX).prop_map(|units| Decimal::new(units, 0)),
        principal(),
    ]
}

/// Strategy mixing huge rates with ordinary ones.
fn extreme_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![Just(Decimal::MAX), Just(Decimal::ONE), rate()]
}

/// Strategy covering the whole `u32` tenure range.
fn extreme_tenure() -> impl Strategy<Value = u32> {
    prop_oneof![Just(u32::MAX), 1u32..=u32::MAX, tenure()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Origination capitalizes `P × r × t / 12` on top of the principal.
    #[test]
    fn prop_outstanding_after_apply(
        principal in principal(),
        rate in rate(),
        tenure in tenure(),
    ) {
        let mut ledger = LoanLedger::new();
        ledger.apply_for_loan("A1", principal, rate, tenure).unwrap();

        let outstanding = ledger.loan_details("A1").unwrap().outstanding_amount();
        prop_assert_eq!(Some(outstanding), Loan::total_payable(principal, rate, tenure));

        // Same value as P × (1 + r×t/12), within Decimal precision
        let alternative = principal
            * (Decimal::ONE + rate * Decimal::from(tenure) / Decimal::from(12));
        prop_assert!((outstanding - alternative).abs() < Decimal::new(1, 12));
        prop_assert!(outstanding >= principal);
    }

    /// Terms at the edge of the `Decimal` range either originate with the
    /// formula's value or are refused as out of range.
    #[test]
    fn prop_extreme_terms_never_panic(
        principal in extreme_principal(),
        rate in extreme_rate(),
        tenure in extreme_tenure(),
    ) {
        let mut ledger = LoanLedger::new();
        match Loan::total_payable(principal, rate, tenure) {
            Some(expected) => {
                let loan = ledger.apply_for_loan("A1", principal, rate, tenure).unwrap();
                prop_assert_eq!(loan.outstanding_amount(), expected);
                prop_assert!(ledger.repay_loan("A1", principal).is_ok());
            }
            None => {
                prop_assert_eq!(
                    ledger.apply_for_loan("A1", principal, rate, tenure).unwrap_err(),
                    LoanError::AmountOverflow
                );
                prop_assert!(ledger.loan_details("A1").is_none());
            }
        }
    }

    /// Each repayment lowers the outstanding amount by exactly the payment,
    /// and the loan disappears once nothing is owed.
    #[test]
    fn prop_repayment_is_exact(
        principal in principal(),
        rate in rate(),
        tenure in tenure(),
        payments in prop::collection::vec(1i64..50_000_000i64, 1..10),
    ) {
        let mut ledger = LoanLedger::new();
        ledger.apply_for_loan("A1", principal, rate, tenure).unwrap();

        for cents in payments {
            let payment = Decimal::new(cents, 2);
            let Some(before) = ledger.loan_details("A1").map(Loan::outstanding_amount) else {
                break;
            };

            let repayment = ledger.repay_loan("A1", payment).unwrap();
            prop_assert_eq!(repayment.outstanding, before - payment);
            prop_assert_eq!(repayment.settled, repayment.outstanding <= Decimal::ZERO);
            prop_assert_eq!(ledger.loan_details("A1").is_none(), repayment.settled);
        }
    }
}
