//! Scheduling error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while scheduling transfers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The execution date lies before today.
    #[error("Cannot schedule transfers in the past: {date} is before {today}")]
    DateInPast {
        /// Requested execution date.
        date: NaiveDate,
        /// Today's date at scheduling time.
        today: NaiveDate,
    },
}

impl ScheduleError {
    /// Returns the error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DateInPast { .. } => "DATE_IN_PAST",
        }
    }
}
