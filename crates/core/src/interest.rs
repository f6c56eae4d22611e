//! Simple (non-compounding) interest accrual.

use rust_decimal::Decimal;

/// Days used to turn the annual rate into a daily rate.
pub const DAYS_IN_YEAR: u32 = 365;

/// Default annual savings rate (3%).
pub const DEFAULT_ANNUAL_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Computes daily interest from a fixed annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestCalculator {
    annual_rate: Decimal,
}

impl Default for InterestCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_RATE)
    }
}

impl InterestCalculator {
    /// Creates a calculator for `annual_rate` (0.03 = 3%).
    #[must_use]
    pub const fn new(annual_rate: Decimal) -> Self {
        Self { annual_rate }
    }

    /// Returns the configured annual rate.
    #[must_use]
    pub const fn annual_rate(&self) -> Decimal {
        self.annual_rate
    }

    /// One day of interest: `balance × (annual_rate / 365)`, or `None` if it
    /// does not fit in a `Decimal`.
    #[must_use]
    pub fn daily_interest(&self, balance: Decimal) -> Option<Decimal> {
        balance.checked_mul(self.annual_rate / Decimal::from(DAYS_IN_YEAR))
    }

    /// Balance after `days` of simple interest:
    /// `balance + daily_interest(balance) × days`, or `None` on overflow.
    #[must_use]
    pub fn apply_interest(&self, balance: Decimal, days: u32) -> Option<Decimal> {
        self.daily_interest(balance)?
            .checked_mul(Decimal::from(days))?
            .checked_add(balance)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn test_default_rate_is_three_percent() {
        assert_eq!(InterestCalculator::default().annual_rate(), dec!(0.03));
    }

    #[test]
    fn test_daily_interest() {
        let calculator = InterestCalculator::default();
        assert_close(calculator.daily_interest(dec!(1000)).unwrap(), dec!(0.082), dec!(0.001));
    }

    #[test]
    fn test_apply_interest_thirty_days() {
        let calculator = InterestCalculator::default();
        assert_close(
            calculator.apply_interest(dec!(1000), 30).unwrap(),
            dec!(1002.47),
            dec!(0.01),
        );
    }

    #[rstest]
    #[case(dec!(0), 30)]
    #[case(dec!(1000), 0)]
    fn test_no_interest_without_balance_or_days(#[case] balance: Decimal, #[case] days: u32) {
        let calculator = InterestCalculator::default();
        assert_eq!(calculator.apply_interest(balance, days), Some(balance));
    }

    #[test]
    fn test_full_year_matches_annual_rate() {
        let calculator = InterestCalculator::new(dec!(0.05));
        assert_close(
            calculator.apply_interest(dec!(2000), DAYS_IN_YEAR).unwrap(),
            dec!(2100),
            dec!(0.000001),
        );
    }

    #[test]
    fn test_interest_is_not_compounded() {
        let calculator = InterestCalculator::default();
        let daily = calculator.daily_interest(dec!(1000)).unwrap();
        assert_eq!(
            calculator.apply_interest(dec!(1000), 10),
            Some(dec!(1000) + daily * dec!(10))
        );
    }

    #[test]
    fn test_negative_balance_accrues_negative_interest() {
        let calculator = InterestCalculator::default();
        assert!(calculator.daily_interest(dec!(-1000)).unwrap() < Decimal::ZERO);
    }

    #[rstest]
    #[case::max_balance(Decimal::MAX, u32::MAX)]
    #[case::min_balance(Decimal::MIN, u32::MAX)]
    fn test_interest_past_decimal_range_is_none(#[case] balance: Decimal, #[case] days: u32) {
        let calculator = InterestCalculator::default();
        assert_eq!(calculator.apply_interest(balance, days), None);
    }

    #[test]
    fn test_huge_rate_overflows_daily_interest() {
        let calculator = InterestCalculator::new(Decimal::MAX);
        assert_eq!(calculator.daily_interest(Decimal::MAX), None);
        assert_eq!(calculator.daily_interest(dec!(0)), Some(dec!(0)));
    }
}
