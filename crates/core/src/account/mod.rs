//! Customer accounts.
//!
//! This module implements:
//! - PIN-authenticated deposits, withdrawals and transfers
//! - Lock/unlock and PIN changes
//! - Account types with minimum-balance and overdraft rules
//! - The overdraft check used when a policy enforces it

pub mod error;
pub mod model;
pub mod overdraft;
pub mod types;

#[cfg(test)]
mod props;

pub use error::AccountError;
pub use model::Account;
pub use overdraft::OverdraftProtection;
pub use types::{AccountPolicy, AccountType};
