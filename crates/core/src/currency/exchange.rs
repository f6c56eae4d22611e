//! Exchange rate table and conversion.
//!
//! Every rate is expressed against the base currency (USD = 1.0), so the
//! rate between two entries is `rate[to] / rate[from]`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CurrencyError;

/// Base currency code; its rate is always 1.0 in the default table.
pub const BASE_CURRENCY: &str = "USD";

/// Mapping from currency code to its rate against the base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateTable {
    rates: BTreeMap<String, Decimal>,
}

impl Default for ExchangeRateTable {
    /// USD 1.0 (base), EUR 0.9, GBP 0.78, INR 83.0.
    fn default() -> Self {
        Self {
            rates: BTreeMap::from([
                (BASE_CURRENCY.to_string(), Decimal::new(10, 1)),
                ("EUR".to_string(), Decimal::new(9, 1)),
                ("GBP".to_string(), Decimal::new(78, 2)),
                ("INR".to_string(), Decimal::new(830, 1)),
            ]),
        }
    }
}

impl ExchangeRateTable {
    /// Creates a table from explicit rates.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidRate` if any rate is zero or negative.
    pub fn new<I, S>(rates: I) -> Result<Self, CurrencyError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut table = Self {
            rates: BTreeMap::new(),
        };
        for (code, rate) in rates {
            table.update_rate(code, rate)?;
        }
        Ok(table)
    }

    /// Inserts or replaces the rate for `code`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidRate` if `rate` is zero or negative.
    pub fn update_rate(
        &mut self,
        code: impl Into<String>,
        rate: Decimal,
    ) -> Result<(), CurrencyError> {
        let code = code.into();
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::InvalidRate { code, rate });
        }
        tracing::debug!(%code, %rate, "exchange rate updated");
        self.rates.insert(code, rate);
        Ok(())
    }

    /// Converts `amount` from one currency to another.
    ///
    /// The result is not rounded. Same-currency conversion returns `amount`
    /// unchanged; zero and negative amounts scale like any other.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` naming the first code
    /// missing from the table, or `CurrencyError::Overflow` if the result
    /// does not fit in a `Decimal`.
    pub fn convert(&self, from: &str, to: &str, amount: Decimal) -> Result<Decimal, CurrencyError> {
        let from_rate = self.lookup(from)?;
        let to_rate = self.lookup(to)?;
        if from == to {
            return Ok(amount);
        }
        to_rate
            .checked_div(from_rate)
            .and_then(|rate| amount.checked_mul(rate))
            .ok_or_else(|| CurrencyError::Overflow {
                from: from.to_string(),
                to: to.to_string(),
                amount,
            })
    }

    /// Returns the rate for `code`, if present.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Returns true if `code` is in the table.
    #[must_use]
    pub fn supports(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Returns a copy of all rates, ordered by currency code.
    #[must_use]
    pub fn rates(&self) -> BTreeMap<String, Decimal> {
        self.rates.clone()
    }

    fn lookup(&self, code: &str) -> Result<Decimal, CurrencyError> {
        self.rate(code)
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(code.to_string()))
    }
}
