//! Account types and policy switches.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of account; each kind carries fixed balance rules.
///
/// | Type    | Minimum balance | Overdraft limit |
/// |---------|-----------------|-----------------|
/// | Savings | 500             | 0               |
/// | Current | 0               | 1000            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Savings account: minimum balance, no overdraft.
    Savings,
    /// Current account: no minimum balance, overdraft allowed.
    Current,
}

impl AccountType {
    /// Balance an account of this type must be opened with.
    #[must_use]
    pub fn minimum_balance(self) -> Decimal {
        match self {
            Self::Savings => Decimal::from(500),
            Self::Current => Decimal::ZERO,
        }
    }

    /// Overdraft limit granted to accounts of this type.
    #[must_use]
    pub fn overdraft_limit(self) -> Decimal {
        match self {
            Self::Savings => Decimal::ZERO,
            Self::Current => Decimal::from(1000),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Savings => write!(f, "savings"),
            Self::Current => write!(f, "current"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(Self::Savings),
            "current" => Ok(Self::Current),
            _ => Err(format!("Unknown account type: {s}")),
        }
    }
}

/// Behavior switches for withdrawals and transfers.
///
/// The default keeps the historical behavior: withdrawals never dip into the
/// overdraft, and the credit leg of a transfer authenticates the target with
/// the sender's PIN (so it silently fails when the PINs differ).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Allow withdrawals while `balance + overdraft_limit >= amount`.
    pub enforce_overdraft: bool,
    /// Credit the transfer target without a PIN check.
    pub trusted_transfer_credit: bool,
}
