//! Timestamped transaction journal.

use std::rc::Rc;

use crate::clock::{Clock, SystemClock};

/// Append-only log of `{timestamp} - {description}` lines.
pub struct TransactionJournal {
    entries: Vec<String>,
    clock: Rc<dyn Clock>,
}

impl Default for TransactionJournal {
    fn default() -> Self {
        Self::new(Rc::new(SystemClock))
    }
}

impl std::fmt::Debug for TransactionJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionJournal")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl TransactionJournal {
    /// Creates an empty journal stamping entries with `clock`.
    #[must_use]
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Appends `description`, prefixed with the current timestamp.
    pub fn record(&mut self, description: impl AsRef<str>) {
        let stamp = self.clock.now().format("%Y-%m-%dT%H:%M:%S%.f");
        self.entries
            .push(format!("{stamp} - {}", description.as_ref()));
    }

    /// Returns a copy of all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Returns the entries containing `keyword`, ignoring case.
    #[must_use]
    pub fn filter_by_keyword(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
