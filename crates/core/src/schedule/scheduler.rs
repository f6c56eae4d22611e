//! Pending transfers and the "due today" sweep.
//!
//! The scheduler only tracks scheduling state. Executing a transfer removes
//! it and reports it; moving money is left to the caller.

use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use teller_shared::AccountId;

use super::error::ScheduleError;
use super::transfer::ScheduledTransfer;
use crate::clock::{Clock, SystemClock};

/// Ordered list of pending transfers.
pub struct TransferScheduler {
    transfers: Vec<ScheduledTransfer>,
    clock: Rc<dyn Clock>,
}

impl Default for TransferScheduler {
    fn default() -> Self {
        Self::new(Rc::new(SystemClock))
    }
}

impl std::fmt::Debug for TransferScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferScheduler")
            .field("transfers", &self.transfers)
            .finish_non_exhaustive()
    }
}

impl TransferScheduler {
    /// Creates an empty scheduler reading "today" from `clock`.
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            transfers: Vec::new(),
            clock,
        }
    }

    /// Appends a transfer due on `date`.
    ///
    /// Amount sign, account existence and duplicates are not checked.
    ///
    /// # Errors
    ///
    /// `DateInPast` if `date` is strictly before today.
    pub fn schedule_transfer(
        &mut self,
        from_account: impl Into<AccountId>,
        to_account: impl Into<AccountId>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<&ScheduledTransfer, ScheduleError> {
        let today = self.clock.today();
        if date < today {
            tracing::warn!(%date, %today, "transfer rejected: date in the past");
            return Err(ScheduleError::DateInPast { date, today });
        }

        let transfer = ScheduledTransfer::new(from_account, to_account, amount, date);
        tracing::info!(%transfer, "transfer scheduled");
        let index = self.transfers.len();
        self.transfers.push(transfer);
        Ok(&self.transfers[index])
    }

    /// Removes and returns every transfer dated exactly today.
    ///
    /// Transfers whose date has already passed are left pending. The
    /// remaining transfers keep their order.
    pub fn execute_due_transfers(&mut self) -> Vec<ScheduledTransfer> {
        let today = self.clock.today();
        let (due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.transfers)
            .into_iter()
            .partition(|transfer| transfer.is_due_on(today));
        self.transfers = pending;

        for transfer in &due {
            tracing::info!("Executed transfer: {transfer}");
        }
        due
    }

    /// Returns a copy of the pending transfers in scheduling order.
    #[must_use]
    pub fn scheduled_transfers(&self) -> Vec<ScheduledTransfer> {
        self.transfers.clone()
    }

    /// Number of pending transfers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}
