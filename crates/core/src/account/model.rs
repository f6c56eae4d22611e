//! Bank account with PIN-authenticated balance operations.
//!
//! `deposit`, `withdraw` and `transfer` report rejections as a plain `false`
//! with no state change. The `try_` variants expose the rejection reason.

use rust_decimal::Decimal;
use teller_shared::AccountId;

use super::error::AccountError;
use super::overdraft::OverdraftProtection;
use super::types::{AccountPolicy, AccountType};

/// A single bank account.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
    currency: String,
    overdraft_limit: Decimal,
    pin: String,
    locked: bool,
    account_type: Option<AccountType>,
    policy: AccountPolicy,
    history: Vec<String>,
}

impl Account {
    /// Creates an unlocked account with an empty transaction log.
    #[must_use]
    pub fn new(
        id: impl Into<AccountId>,
        balance: Decimal,
        currency: impl Into<String>,
        overdraft_limit: Decimal,
        pin: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            balance,
            currency: currency.into(),
            overdraft_limit,
            pin: pin.into(),
            locked: false,
            account_type: None,
            policy: AccountPolicy::default(),
            history: Vec::new(),
        }
    }

    /// Opens an account of `account_type`, taking its overdraft limit from the type.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::BelowMinimumBalance` if `opening_balance` is
    /// below the type's minimum balance.
    pub fn open(
        id: impl Into<AccountId>,
        account_type: AccountType,
        currency: impl Into<String>,
        pin: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<Self, AccountError> {
        let required = account_type.minimum_balance();
        if opening_balance < required {
            return Err(AccountError::BelowMinimumBalance {
                required,
                offered: opening_balance,
            });
        }

        let mut account = Self::new(
            id,
            opening_balance,
            currency,
            account_type.overdraft_limit(),
            pin,
        );
        account.account_type = Some(account_type);
        Ok(account)
    }

    /// Replaces the account's policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AccountPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the account id.
    #[must_use]
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Returns the current balance.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the currency code the account was opened in.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the overdraft limit.
    #[must_use]
    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Returns the account type, if the account was opened from one.
    #[must_use]
    pub fn account_type(&self) -> Option<AccountType> {
        self.account_type
    }

    /// Returns the account policy.
    #[must_use]
    pub fn policy(&self) -> AccountPolicy {
        self.policy
    }

    /// Returns true if the account is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns true if `pin` matches.
    #[must_use]
    pub fn authenticate(&self, pin: &str) -> bool {
        self.pin == pin
    }

    /// Locks the account.
    pub fn lock(&mut self) {
        self.locked = true;
        tracing::info!(account = %self.id, "account locked");
    }

    /// Unlocks the account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::AuthenticationFailed` on a wrong PIN; the
    /// account stays locked.
    pub fn unlock(&mut self, pin: &str) -> Result<(), AccountError> {
        if !self.authenticate(pin) {
            tracing::warn!(account = %self.id, "unlock rejected: incorrect PIN");
            return Err(AccountError::AuthenticationFailed);
        }
        self.locked = false;
        tracing::info!(account = %self.id, "account unlocked");
        Ok(())
    }

    /// Replaces the PIN. The new PIN is not checked for format or strength.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::AuthenticationFailed` if `old_pin` is wrong.
    pub fn change_pin(
        &mut self,
        old_pin: &str,
        new_pin: impl Into<String>,
    ) -> Result<(), AccountError> {
        if !self.authenticate(old_pin) {
            tracing::warn!(account = %self.id, "PIN change rejected: incorrect old PIN");
            return Err(AccountError::AuthenticationFailed);
        }
        self.pin = new_pin.into();
        Ok(())
    }

    /// Deposits `amount`. Returns false, changing nothing, on a wrong PIN or
    /// a non-positive amount.
    pub fn deposit(&mut self, amount: Decimal, pin: &str) -> bool {
        self.try_deposit(amount, pin).is_ok()
    }

    /// Deposits `amount`, reporting why a deposit was rejected.
    ///
    /// # Errors
    ///
    /// `AuthenticationFailed`, `NonPositiveAmount` or `Overflow`.
    pub fn try_deposit(&mut self, amount: Decimal, pin: &str) -> Result<(), AccountError> {
        if !self.authenticate(pin) {
            return Err(self.rejected("deposit", AccountError::AuthenticationFailed));
        }
        self.credit(amount)
    }

    /// Withdraws `amount`. Returns false, changing nothing, on a wrong PIN, a
    /// non-positive amount, insufficient funds, or a balance out of range.
    pub fn withdraw(&mut self, amount: Decimal, pin: &str) -> bool {
        self.try_withdraw(amount, pin).is_ok()
    }

    /// Withdraws `amount`, reporting why a withdrawal was rejected.
    ///
    /// Unless the policy enforces the overdraft, only the balance is
    /// available; the overdraft limit is ignored.
    ///
    /// # Errors
    ///
    /// `AuthenticationFailed`, `NonPositiveAmount`, `InsufficientFunds` or
    /// `Overflow`.
    pub fn try_withdraw(&mut self, amount: Decimal, pin: &str) -> Result<(), AccountError> {
        if !self.authenticate(pin) {
            return Err(self.rejected("withdraw", AccountError::AuthenticationFailed));
        }
        if amount <= Decimal::ZERO {
            return Err(self.rejected("withdraw", AccountError::NonPositiveAmount(amount)));
        }

        let allowed = if self.policy.enforce_overdraft {
            OverdraftProtection::can_withdraw(amount, self.balance, self.overdraft_limit)
        } else {
            self.balance >= amount
        };
        if !allowed {
            let available = if self.policy.enforce_overdraft {
                self.balance.saturating_add(self.overdraft_limit)
            } else {
                self.balance
            };
            return Err(self.rejected(
                "withdraw",
                AccountError::InsufficientFunds {
                    requested: amount,
                    available,
                },
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| self.rejected("withdraw", AccountError::Overflow))?;
        self.log(format!("Withdrew: {amount}"));
        Ok(())
    }

    /// Moves `amount` to `target`.
    ///
    /// Returns whether the withdrawal leg succeeded. The credit leg's outcome
    /// is not part of the result; see [`Account::try_transfer`].
    pub fn transfer(&mut self, target: &mut Account, amount: Decimal, pin: &str) -> bool {
        self.try_transfer(target, amount, pin).is_ok()
    }

    /// Moves `amount` to `target`, reporting why the withdrawal leg failed.
    ///
    /// The credit leg authenticates `target` with the sender's `pin` unless
    /// the sender's policy trusts transfer credits. When that credit is
    /// rejected the withdrawn amount is not returned, and `Ok(false)` is
    /// reported; `Ok(true)` means both legs were applied.
    ///
    /// # Errors
    ///
    /// `Overflow` if crediting `target` would overflow its balance, checked
    /// before anything moves; otherwise any error from the withdrawal leg.
    pub fn try_transfer(
        &mut self,
        target: &mut Account,
        amount: Decimal,
        pin: &str,
    ) -> Result<bool, AccountError> {
        if target.balance.checked_add(amount).is_none() {
            return Err(self.rejected("transfer", AccountError::Overflow));
        }
        self.try_withdraw(amount, pin)?;

        let credited = if self.policy.trusted_transfer_credit {
            target.credit(amount)
        } else {
            target.try_deposit(amount, pin)
        };
        if let Err(e) = &credited {
            tracing::warn!(
                from = %self.id,
                to = %target.id,
                %amount,
                error = %e,
                "transfer credit leg rejected; withdrawn amount not returned"
            );
        }

        self.log(format!("Transferred: {amount} to {}", target.id));
        Ok(credited.is_ok())
    }

    /// Multiplies the balance by `rate` and logs the new balance with
    /// `target_currency`. The stored currency code is left unchanged.
    ///
    /// # Errors
    ///
    /// `Overflow` if the converted balance does not fit; the balance is kept.
    pub fn convert_balance(
        &mut self,
        rate: Decimal,
        target_currency: &str,
    ) -> Result<(), AccountError> {
        self.balance = self
            .balance
            .checked_mul(rate)
            .ok_or_else(|| self.rejected("convert", AccountError::Overflow))?;
        self.log(format!(
            "Converted balance to: {} {target_currency}",
            self.balance
        ));
        Ok(())
    }

    /// Returns a copy of the transaction log, oldest first.
    #[must_use]
    pub fn transaction_history(&self) -> Vec<String> {
        self.history.clone()
    }

    /// Empties the transaction log.
    pub fn clear_transaction_history(&mut self) {
        self.history.clear();
    }

    fn credit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(self.rejected("deposit", AccountError::NonPositiveAmount(amount)));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.rejected("deposit", AccountError::Overflow))?;
        self.log(format!("Deposited: {amount}"));
        Ok(())
    }

    fn log(&mut self, entry: String) {
        tracing::debug!(account = %self.id, %entry, "transaction logged");
        self.history.push(entry);
    }

    fn rejected(&self, operation: &str, error: AccountError) -> AccountError {
        tracing::warn!(account = %self.id, operation, error = %error, "operation rejected");
        error
    }
}
