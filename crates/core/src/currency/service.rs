//! Rounding and display of money amounts.
//!
//! Conversions in [`super::ExchangeRateTable`] are kept unrounded; rounding
//! only happens when an amount is presented.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Number of decimal places used when presenting amounts.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Presentation helpers for converted and accrued amounts.
pub struct CurrencyService;

impl CurrencyService {
    /// Rounds half to even at `decimal_places`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use teller_core::currency::CurrencyService;
    ///
    /// assert_eq!(CurrencyService::round(dec!(10.125), 2), dec!(10.12));
    /// assert_eq!(CurrencyService::round(dec!(10.135), 2), dec!(10.14));
    /// ```
    #[must_use]
    pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
    }

    /// Rounds for display, always showing two decimal places.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use teller_core::currency::CurrencyService;
    ///
    /// assert_eq!(CurrencyService::format(dec!(90)), "90.00");
    /// assert_eq!(CurrencyService::format(dec!(1002.4657)), "1002.47");
    /// ```
    #[must_use]
    pub fn format(value: Decimal) -> String {
        let mut rounded = Self::round(value, DISPLAY_DECIMAL_PLACES);
        rounded.rescale(DISPLAY_DECIMAL_PLACES);
        rounded.to_string()
    }
}
