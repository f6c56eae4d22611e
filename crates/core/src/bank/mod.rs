//! Bank facade over accounts, loans, scheduled transfers and currency.

pub mod error;
pub mod service;
pub mod settings;

pub use error::BankError;
pub use service::Bank;
pub use settings::BankSettings;
