//! Multi-currency handling and exchange rates.

pub mod error;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use error::CurrencyError;
pub use exchange::{BASE_CURRENCY, ExchangeRateTable};
pub use service::CurrencyService;
