//! Application configuration management.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Account policy switches.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Bank configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Annual savings interest rate as a fraction (0.03 = 3%).
    #[serde(default = "default_annual_interest_rate")]
    pub annual_interest_rate: Decimal,
    /// Exchange rates against the base currency, keyed by currency code.
    #[serde(default = "default_exchange_rates")]
    pub exchange_rates: HashMap<String, Decimal>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            annual_interest_rate: default_annual_interest_rate(),
            exchange_rates: default_exchange_rates(),
        }
    }
}

fn default_annual_interest_rate() -> Decimal {
    Decimal::new(3, 2) // 3%
}

fn default_exchange_rates() -> HashMap<String, Decimal> {
    HashMap::from([
        ("USD".to_string(), Decimal::new(10, 1)), // base currency
        ("EUR".to_string(), Decimal::new(9, 1)),
        ("GBP".to_string(), Decimal::new(78, 2)),
        ("INR".to_string(), Decimal::new(830, 1)),
    ])
}

impl BankConfig {
    /// Returns the exchange rates with upper-cased currency codes.
    ///
    /// Configuration sources lower-case keys, so codes are normalized here
    /// before they reach the rate table.
    #[must_use]
    pub fn normalized_rates(&self) -> BTreeMap<String, Decimal> {
        self.exchange_rates
            .iter()
            .map(|(code, rate)| (code.trim().to_uppercase(), *rate))
            .collect()
    }
}

/// Account policy switches.
///
/// Both default to `false`, which keeps the historical behavior: withdrawals
/// ignore the overdraft limit and the credit leg of a transfer is
/// authenticated with the sender's PIN.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PolicyConfig {
    /// Allow withdrawals down to `-overdraft_limit`.
    #[serde(default)]
    pub enforce_overdraft: bool,
    /// Credit the transfer target without checking a PIN.
    #[serde(default)]
    pub trusted_transfer_credit: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "teller=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TELLER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
