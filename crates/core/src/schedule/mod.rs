//! Date-triggered transfers.

pub mod error;
pub mod scheduler;
pub mod transfer;

#[cfg(test)]
mod props;

pub use error::ScheduleError;
pub use scheduler::TransferScheduler;
pub use transfer::ScheduledTransfer;
