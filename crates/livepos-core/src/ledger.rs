//! The order ledger: an ordered, newest-first sequence of records.
//!
//! New records are prepended so the most recent order sits at the top of
//! the list without scrolling. Once a bulk edit has been applied the only
//! ordering guarantee is "as the caller left it" - a deliberate trade of
//! integrity for operator speed during a live session.

use crate::error::{PosError, Result};
use crate::order::OrderRecord;

/// Ordered collection of order records for the current session.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<OrderRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the top of the ledger.
    ///
    /// Field validation happens at the submission boundary, not here.
    pub fn append(&mut self, record: OrderRecord) {
        self.records.insert(0, record);
    }

    /// Remove and return the most recent record.
    ///
    /// Returns `None` when the ledger is empty; retracting from an empty
    /// ledger is a no-op.
    pub fn retract_last(&mut self) -> Option<OrderRecord> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.records.remove(0))
        }
    }

    /// Atomically swap the entire ledger contents.
    ///
    /// Used for bulk edits from a table-editing surface. No validation is
    /// performed on the replacement; duplicate or malformed rows are
    /// accepted as-is.
    pub fn replace_all(&mut self, records: Vec<OrderRecord>) {
        self.records = records;
    }

    /// Replace a single row in full.
    pub fn replace_row(&mut self, index: usize, record: OrderRecord) -> Result<()> {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(PosError::NotFound(format!("ledger row {}", index))),
        }
    }

    /// Borrow the current records, newest first.
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// Read-only copy of the current records for aggregation or display.
    pub fn snapshot(&self) -> Vec<OrderRecord> {
        self.records.clone()
    }

    pub fn get(&self, index: usize) -> Option<&OrderRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item: &str) -> OrderRecord {
        OrderRecord::with_timestamp(item, "Judy", "黑/Hitam", "M", "12:00:00")
    }

    #[test]
    fn test_append_prepends() {
        let mut ledger = Ledger::new();
        ledger.append(record("A01"));
        ledger.append(record("B02"));

        assert_eq!(ledger.records()[0].item_code, "B02");
        assert_eq!(ledger.records()[1].item_code, "A01");
    }

    #[test]
    fn test_retract_removes_newest() {
        let mut ledger = Ledger::new();
        ledger.append(record("A01"));
        ledger.append(record("B02"));

        let removed = ledger.retract_last().expect("record should be removed");
        assert_eq!(removed.item_code, "B02");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_retract_on_empty_is_noop() {
        let mut ledger = Ledger::new();
        assert!(ledger.retract_last().is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_length_tracks_submits_minus_retracts() {
        let mut ledger = Ledger::new();
        for i in 0..5 {
            ledger.append(record(&format!("A{:02}", i)));
        }
        for _ in 0..3 {
            ledger.retract_last();
        }
        // Extra retracts beyond the submit count stay no-ops
        for _ in 0..4 {
            ledger.retract_last();
        }
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_replace_all_swaps_contents() {
        let mut ledger = Ledger::new();
        ledger.append(record("A01"));

        ledger.replace_all(vec![record("C03"), record("C03")]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].item_code, "C03");
    }

    #[test]
    fn test_replace_row_out_of_range() {
        let mut ledger = Ledger::new();
        ledger.append(record("A01"));

        let err = ledger.replace_row(3, record("B02")).unwrap_err();
        assert!(matches!(err, PosError::NotFound(_)));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut ledger = Ledger::new();
        ledger.append(record("A01"));

        let snapshot = ledger.snapshot();
        ledger.retract_last();
        assert_eq!(snapshot.len(), 1);
        assert!(ledger.is_empty());
    }
}
