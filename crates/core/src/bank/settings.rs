//! Settings a [`super::Bank`] is built from.

use rust_decimal::Decimal;
use teller_shared::AppConfig;

use crate::account::AccountPolicy;
use crate::currency::{CurrencyError, ExchangeRateTable};
use crate::interest::DEFAULT_ANNUAL_RATE;

/// Explicit configuration for a bank instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSettings {
    /// Exchange rates against the base currency.
    pub exchange_rates: ExchangeRateTable,
    /// Annual savings interest rate.
    pub annual_interest_rate: Decimal,
    /// Policy applied to every account the bank opens.
    pub account_policy: AccountPolicy,
}

impl Default for BankSettings {
    fn default() -> Self {
        Self {
            exchange_rates: ExchangeRateTable::default(),
            annual_interest_rate: DEFAULT_ANNUAL_RATE,
            account_policy: AccountPolicy::default(),
        }
    }
}

impl TryFrom<&AppConfig> for BankSettings {
    type Error = CurrencyError;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            exchange_rates: ExchangeRateTable::new(config.bank.normalized_rates())?,
            annual_interest_rate: config.bank.annual_interest_rate,
            account_policy: AccountPolicy {
                enforce_overdraft: config.policy.enforce_overdraft,
                trusted_transfer_credit: config.policy.trusted_transfer_credit,
            },
        })
    }
}
