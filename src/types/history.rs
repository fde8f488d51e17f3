//! Append-only transaction history of a single account

use super::transaction::TransactionRecord;

/// Text rendered by a statement when nothing has been recorded yet
pub const NO_MOVEMENTS: &str = "No movements recorded.";

/// Chronological log of an account's completed transactions
///
/// Records can only be appended; insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        History {
            records: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render every record on its own line, or [`NO_MOVEMENTS`] when empty
    pub fn statement(&self) -> String {
        if self.records.is_empty() {
            return NO_MOVEMENTS.to_string();
        }

        self.records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
