//! Bank facade tying accounts, loans, scheduling and currency together.
//!
//! Every successful state change is recorded in the bank's journal.

use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use teller_shared::AccountId;

use super::error::BankError;
use super::settings::BankSettings;
use crate::account::{Account, AccountError, AccountPolicy, AccountType};
use crate::clock::{Clock, SystemClock};
use crate::currency::{CurrencyError, ExchangeRateTable};
use crate::interest::InterestCalculator;
use crate::journal::TransactionJournal;
use crate::loan::{Loan, LoanLedger, Repayment};
use crate::schedule::{ScheduledTransfer, TransferScheduler};

/// In-memory bank.
#[derive(Debug)]
pub struct Bank {
    accounts: HashMap<AccountId, Account>,
    rates: ExchangeRateTable,
    loans: LoanLedger,
    scheduler: TransferScheduler,
    interest: InterestCalculator,
    journal: TransactionJournal,
    policy: AccountPolicy,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(BankSettings::default())
    }
}

impl Bank {
    /// Creates a bank that reads the date from the system clock.
    #[must_use]
    pub fn new(settings: BankSettings) -> Self {
        Self::with_clock(settings, Rc::new(SystemClock))
    }

    /// Creates a bank that reads the date from `clock`.
    #[must_use]
    pub fn with_clock(settings: BankSettings, clock: Rc<dyn Clock>) -> Self {
        Self {
            accounts: HashMap::new(),
            rates: settings.exchange_rates,
            loans: LoanLedger::new(),
            scheduler: TransferScheduler::new(Rc::clone(&clock)),
            interest: InterestCalculator::new(settings.annual_interest_rate),
            journal: TransactionJournal::new(clock),
            policy: settings.account_policy,
        }
    }

    // ========== Accounts ==========

    /// Opens an account under the bank's policy.
    ///
    /// # Errors
    ///
    /// `DuplicateAccount`, `UnsupportedCurrency` for a currency missing from
    /// the rate table, or `BelowMinimumBalance` for the account type.
    pub fn open_account(
        &mut self,
        id: impl Into<AccountId>,
        account_type: AccountType,
        currency: &str,
        pin: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<&Account, BankError> {
        let id = id.into();
        if self.accounts.contains_key(&id) {
            return Err(BankError::DuplicateAccount(id));
        }
        if !self.rates.supports(currency) {
            return Err(CurrencyError::UnsupportedCurrency(currency.to_string()).into());
        }

        let account = Account::open(id.clone(), account_type, currency, pin, opening_balance)?
            .with_policy(self.policy);
        tracing::info!(account = %id, %account_type, currency, %opening_balance, "account opened");
        self.journal.record(format!(
            "Opened {account_type} account {id} with {opening_balance} {currency}"
        ));
        Ok(self.accounts.entry(id).or_insert(account))
    }

    /// Returns the account, if it exists.
    #[must_use]
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Returns the account for lock/unlock and PIN changes.
    pub fn account_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Number of open accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Deposits into `id`; `Ok(false)` is a silent rejection.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`.
    pub fn deposit(&mut self, id: &str, amount: Decimal, pin: &str) -> Result<bool, BankError> {
        let account = self.existing_mut(id)?;
        let done = account.deposit(amount, pin);
        if done {
            self.journal.record(format!("Deposited: {amount} to {id}"));
        }
        Ok(done)
    }

    /// Withdraws from `id`; `Ok(false)` is a silent rejection.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`.
    pub fn withdraw(&mut self, id: &str, amount: Decimal, pin: &str) -> Result<bool, BankError> {
        let account = self.existing_mut(id)?;
        let done = account.withdraw(amount, pin);
        if done {
            self.journal.record(format!("Withdrew: {amount} from {id}"));
        }
        Ok(done)
    }

    /// Transfers between two accounts; the result is the account-level
    /// transfer result.
    ///
    /// # Errors
    ///
    /// `AccountNotFound` for either id, `SameAccount` if they match.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        pin: &str,
    ) -> Result<bool, BankError> {
        if from == to {
            return Err(BankError::SameAccount(AccountId::new(from)));
        }
        let [source, target] = self.accounts.get_disjoint_mut([from, to]);
        let source = source.ok_or_else(|| BankError::AccountNotFound(AccountId::new(from)))?;
        let target = target.ok_or_else(|| BankError::AccountNotFound(AccountId::new(to)))?;

        let done = source.transfer(target, amount, pin);
        if done {
            self.journal
                .record(format!("Transferred: {amount} from {from} to {to}"));
        }
        Ok(done)
    }

    /// Converts an account's balance into `target_currency` at the table rate.
    ///
    /// The account keeps its original currency code; only the balance and
    /// its log change.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, `UnsupportedCurrency`, or an overflowing balance.
    pub fn convert_account_balance(
        &mut self,
        id: &str,
        target_currency: &str,
    ) -> Result<Decimal, BankError> {
        let source_currency = self
            .account(id)
            .ok_or_else(|| BankError::AccountNotFound(AccountId::new(id)))?
            .currency()
            .to_string();
        let rate = self.rates.convert(&source_currency, target_currency, Decimal::ONE)?;

        let account = self.existing_mut(id)?;
        account.convert_balance(rate, target_currency)?;
        let balance = account.balance();
        self.journal.record(format!(
            "Converted balance of {id} from {source_currency} to {target_currency}"
        ));
        Ok(balance)
    }

    /// Balance of `id` after `days` of simple interest. Nothing is credited.
    ///
    /// # Errors
    ///
    /// `AccountNotFound`, or `Overflow` if the projection leaves the
    /// `Decimal` range.
    pub fn projected_balance(&self, id: &str, days: u32) -> Result<Decimal, BankError> {
        let account = self
            .account(id)
            .ok_or_else(|| BankError::AccountNotFound(AccountId::new(id)))?;
        self.interest
            .apply_interest(account.balance(), days)
            .ok_or(BankError::Account(AccountError::Overflow))
    }

    // ========== Currency ==========

    /// Converts `amount` between two currencies.
    ///
    /// # Errors
    ///
    /// `UnsupportedCurrency`.
    pub fn convert(&self, from: &str, to: &str, amount: Decimal) -> Result<Decimal, BankError> {
        let converted = self.rates.convert(from, to, amount)?;
        tracing::debug!(from, to, %amount, %converted, "currency converted");
        Ok(converted)
    }

    /// Inserts or replaces an exchange rate.
    ///
    /// # Errors
    ///
    /// `InvalidRate` for a non-positive rate.
    pub fn update_rate(&mut self, code: &str, rate: Decimal) -> Result<(), BankError> {
        self.rates.update_rate(code, rate)?;
        self.journal
            .record(format!("Exchange rate for {code} set to {rate}"));
        Ok(())
    }

    /// Returns the exchange rate table.
    #[must_use]
    pub fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }

    // ========== Loans ==========

    /// Originates a loan for `account_id`.
    ///
    /// # Errors
    ///
    /// `ExistingLoan`, invalid loan terms, or `AmountOverflow`.
    pub fn apply_for_loan(
        &mut self,
        account_id: &str,
        principal: Decimal,
        interest_rate: Decimal,
        tenure_months: u32,
    ) -> Result<&Loan, BankError> {
        let loan = self
            .loans
            .apply_for_loan(account_id, principal, interest_rate, tenure_months)?;
        self.journal.record(format!(
            "Loan of {principal} at {interest_rate} for {tenure_months} months granted to {account_id}"
        ));
        Ok(loan)
    }

    /// Applies a repayment to the account's loan.
    ///
    /// # Errors
    ///
    /// `NoActiveLoan` or `NonPositiveRepayment`.
    pub fn repay_loan(
        &mut self,
        account_id: &str,
        payment: Decimal,
    ) -> Result<Repayment, BankError> {
        let repayment = self.loans.repay_loan(account_id, payment)?;
        self.journal
            .record(format!("Loan repayment of {payment} by {account_id}"));
        Ok(repayment)
    }

    /// Returns the active loan for `account_id`, if any.
    #[must_use]
    pub fn loan_details(&self, account_id: &str) -> Option<&Loan> {
        self.loans.loan_details(account_id)
    }

    // ========== Scheduled transfers ==========

    /// Schedules a transfer for `date`.
    ///
    /// # Errors
    ///
    /// `DateInPast`.
    pub fn schedule_transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<&ScheduledTransfer, BankError> {
        let transfer = self.scheduler.schedule_transfer(from, to, amount, date)?;
        self.journal.record(format!("Scheduled: {transfer}"));
        Ok(transfer)
    }

    /// Removes and returns the transfers due today. No money moves.
    pub fn execute_due_transfers(&mut self) -> Vec<ScheduledTransfer> {
        let executed = self.scheduler.execute_due_transfers();
        for transfer in &executed {
            self.journal.record(format!("Executed transfer: {transfer}"));
        }
        executed
    }

    /// Returns a copy of the pending transfers.
    #[must_use]
    pub fn scheduled_transfers(&self) -> Vec<ScheduledTransfer> {
        self.scheduler.scheduled_transfers()
    }

    // ========== Journal ==========

    /// Returns the bank's journal.
    #[must_use]
    pub fn journal(&self) -> &TransactionJournal {
        &self.journal
    }

    fn existing_mut(&mut self, id: &str) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| BankError::AccountNotFound(AccountId::new(id)))
    }
}
