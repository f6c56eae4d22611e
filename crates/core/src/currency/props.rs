//! Property-based tests for currency conversion.
//!
//! - Identity conversion
//! - Rate inversion consistency
//! - Proportional scaling
//! - Overflow at the edge of the `Decimal` range

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::CurrencyError;
use super::exchange::ExchangeRateTable;

/// Strategy to generate decimal amounts (-1,000,000.00 to 1,000,000.00).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy mixing the `Decimal` extremes with ordinary amounts.
fn extreme_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::MIN),
        Just(Decimal::MAX / Decimal::TWO),
        any_amount(),
    ]
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick one of the default currency codes.
fn default_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("USD"), Just("EUR"), Just("GBP"), Just("INR")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting a currency into itself returns the amount unchanged.
    #[test]
    fn prop_same_currency_is_identity(
        code in default_code(),
        amount in any_amount(),
    ) {
        let table = ExchangeRateTable::default();
        prop_assert_eq!(table.convert(code, code, amount).unwrap(), amount);
    }

    /// `convert(a, b, x)` matches `x / convert(b, a, 1)` within tolerance.
    #[test]
    fn prop_rate_inversion_consistent(
        from_rate in positive_rate(),
        to_rate in positive_rate(),
        amount in any_amount(),
    ) {
        let table = ExchangeRateTable::new([("AAA", from_rate), ("BBB", to_rate)]).unwrap();

        let forward = table.convert("AAA", "BBB", amount).unwrap();
        let back_unit = table.convert("BBB", "AAA", Decimal::ONE).unwrap();
        let via_inverse = amount / back_unit;

        let tolerance = Decimal::new(1, 6) * (Decimal::ONE + forward.abs());
        prop_assert!(
            (forward - via_inverse).abs() <= tolerance,
            "forward {} vs inverse {}",
            forward,
            via_inverse
        );
    }

    /// Conversion scales linearly: doubling the amount doubles the result.
    #[test]
    fn prop_conversion_is_proportional(
        from in default_code(),
        to in default_code(),
        amount in any_amount(),
    ) {
        let table = ExchangeRateTable::default();
        let single = table.convert(from, to, amount).unwrap();
        let double = table.convert(from, to, amount * Decimal::TWO).unwrap();
        let tolerance = Decimal::new(1, 10);
        prop_assert!((double - single * Decimal::TWO).abs() <= tolerance);
    }

    /// Conversions of extreme amounts return a value or a typed overflow,
    /// and same-currency conversions always succeed.
    #[test]
    fn prop_extreme_amounts_never_panic(
        from in default_code(),
        to in default_code(),
        amount in extreme_amount(),
    ) {
        let table = ExchangeRateTable::default();
        match table.convert(from, to, amount) {
            Ok(converted) => {
                if from == to {
                    prop_assert_eq!(converted, amount);
                }
            }
            Err(e) => {
                prop_assert!(from != to);
                let is_overflow = matches!(e, CurrencyError::Overflow { .. });
                prop_assert!(is_overflow, "unexpected error {}", e);
            }
        }
    }
}
