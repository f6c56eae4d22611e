//! Loan origination and repayment.

pub mod error;
pub mod ledger;
pub mod model;

#[cfg(test)]
mod props;

pub use error::LoanError;
pub use ledger::{LoanLedger, Repayment};
pub use model::Loan;
