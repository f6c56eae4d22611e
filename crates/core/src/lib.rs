//! Core business logic for Teller.
//!
//! In-memory banking: PIN-protected accounts, a single-loan-per-account
//! ledger, date-triggered transfers, currency conversion, simple interest
//! and a timestamped journal. Nothing here touches I/O; the date comes
//! from a [`clock::Clock`].
//!
//! # Modules
//!
//! - `account` - Accounts, account types and overdraft checks
//! - `bank` - Facade owning every other component
//! - `currency` - Exchange rate table and rounding
//! - `interest` - Daily simple interest
//! - `journal` - Timestamped transaction journal
//! - `loan` - Loan origination and repayment
//! - `schedule` - Scheduled transfers

pub mod account;
pub mod bank;
pub mod clock;
pub mod currency;
pub mod interest;
pub mod journal;
pub mod loan;
pub mod schedule;
