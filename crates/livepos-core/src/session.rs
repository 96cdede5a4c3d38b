//! Session state: the single struct owning all mutable state for one
//! live-sales session.
//!
//! A session is created empty at start and discarded at the end unless
//! explicitly saved. There are no ambient globals; the interaction surface
//! holds exactly one `Session` and drives it one action at a time.

use crate::error::{PosError, Result};
use crate::ledger::Ledger;
use crate::order::{OrderField, OrderRecord};
use crate::price_book::PriceBook;
use crate::vocab::{VocabKind, VocabularyStore};

/// All mutable state for one live session: ledger, vocabulary, price book.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    vocabulary: VocabularyStore,
    price_book: PriceBook,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    pub fn price_book(&self) -> &PriceBook {
        &self.price_book
    }

    /// Record a confirmed order.
    ///
    /// All four fields must be non-blank; validation failure leaves every
    /// piece of state untouched. On success the record is stamped with the
    /// local time, prepended to the ledger, each field value is offered to
    /// the vocabulary history, and the price book gains a zeroed entry for
    /// a first-seen item code.
    pub fn submit(
        &mut self,
        item_code: &str,
        customer_name: &str,
        color: &str,
        size: &str,
    ) -> Result<OrderRecord> {
        let mut missing = Vec::new();
        for (label, value) in [
            ("item code", item_code),
            ("customer name", customer_name),
            ("color", color),
            ("size", size),
        ] {
            if value.trim().is_empty() {
                missing.push(label);
            }
        }
        if !missing.is_empty() {
            return Err(PosError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }

        let record = OrderRecord::new(
            item_code.trim(),
            customer_name.trim(),
            color.trim(),
            size.trim(),
        );
        self.ledger.append(record.clone());
        self.vocabulary.record_if_new(VocabKind::Item, item_code);
        self.vocabulary.record_if_new(VocabKind::Color, color);
        self.vocabulary.record_if_new(VocabKind::Size, size);
        self.price_book.ensure_default(record.item_code.as_str());
        Ok(record)
    }

    /// Undo the most recent order. Returns the removed record, or `None`
    /// when the ledger was already empty.
    pub fn retract_last(&mut self) -> Option<OrderRecord> {
        self.ledger.retract_last()
    }

    /// Swap the whole ledger for an edited copy. No validation; the bulk
    /// editor is trusted during a live session.
    pub fn replace_all(&mut self, records: Vec<OrderRecord>) {
        self.ledger.replace_all(records);
    }

    /// Edit one cell of one ledger row via full-row replace.
    ///
    /// Renaming an item code this way does not touch price-book keys; the
    /// old entry stays and the new code reads as zeros until priced.
    pub fn edit_cell(&mut self, row: usize, field: OrderField, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PosError::Validation(format!(
                "{} must not be empty",
                field.label()
            )));
        }
        let mut record = self
            .ledger
            .get(row)
            .cloned()
            .ok_or_else(|| PosError::NotFound(format!("ledger row {}", row)))?;
        match field {
            OrderField::ItemCode => record.item_code = value.to_string(),
            OrderField::CustomerName => record.customer_name = value.to_string(),
            OrderField::Color => record.color = value.to_string(),
            OrderField::Size => record.size = value.to_string(),
            OrderField::Timestamp => record.timestamp = value.to_string(),
        }
        self.ledger.replace_row(row, record)
    }

    /// Set the cost and sale price for an item code.
    pub fn set_price(&mut self, item_code: &str, cost: u64, price: u64) -> Result<()> {
        let item_code = item_code.trim();
        if item_code.is_empty() {
            return Err(PosError::Validation(
                "item code must not be empty".to_string(),
            ));
        }
        self.price_book.set(item_code, cost, price);
        self.vocabulary.record_if_new(VocabKind::Item, item_code);
        Ok(())
    }

    /// Restore state from a loaded session file, replacing the ledger in
    /// full and merging vocabulary and price figures.
    pub(crate) fn restore(
        &mut self,
        records: Vec<OrderRecord>,
        prices: Vec<(String, u64, u64)>,
    ) {
        for record in &records {
            self.vocabulary
                .record_if_new(VocabKind::Item, &record.item_code);
            self.vocabulary.record_if_new(VocabKind::Color, &record.color);
            self.vocabulary.record_if_new(VocabKind::Size, &record.size);
        }
        // File order, so a duplicated item code resolves last-row-wins.
        for (item_code, cost, price) in prices {
            self.price_book.set(item_code, cost, price);
        }
        self.ledger.replace_all(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary;

    #[test]
    fn test_submit_appends_and_learns() {
        let mut session = Session::new();
        let record = session
            .submit("A01", "Judy", "黑/Hitam", "M")
            .expect("submit should succeed");

        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().records()[0], record);
        assert_eq!(session.vocabulary().history(VocabKind::Item), ["A01"]);
        // Default color stays out of history
        assert!(session.vocabulary().history(VocabKind::Color).is_empty());
        // First-seen item code gets a zeroed price entry
        assert!(session.price_book().contains("A01"));
    }

    #[test]
    fn test_submit_rejects_blank_fields_without_mutation() {
        let mut session = Session::new();
        let err = session.submit("A01", "  ", "黑/Hitam", "").unwrap_err();
        assert!(matches!(err, PosError::Validation(_)));
        let message = err.to_string();
        assert!(message.contains("customer name"));
        assert!(message.contains("size"));

        assert!(session.ledger().is_empty());
        assert!(session.vocabulary().history(VocabKind::Item).is_empty());
        assert!(session.price_book().is_empty());
    }

    #[test]
    fn test_retract_then_submit_balance() {
        let mut session = Session::new();
        session.submit("A01", "Judy", "黑/Hitam", "M").unwrap();
        session.submit("A02", "Amy", "白/Putih", "S").unwrap();
        assert!(session.retract_last().is_some());
        assert!(session.retract_last().is_some());
        assert!(session.retract_last().is_none());
        assert_eq!(session.ledger().len(), 0);
    }

    #[test]
    fn test_edit_cell_replaces_field() {
        let mut session = Session::new();
        session.submit("A01", "Judy", "黑/Hitam", "M").unwrap();

        session
            .edit_cell(0, OrderField::Size, "XL")
            .expect("edit should succeed");
        assert_eq!(session.ledger().records()[0].size, "XL");
    }

    #[test]
    fn test_edit_cell_rejects_bad_row_and_blank_value() {
        let mut session = Session::new();
        session.submit("A01", "Judy", "黑/Hitam", "M").unwrap();

        assert!(matches!(
            session.edit_cell(5, OrderField::Size, "XL"),
            Err(PosError::NotFound(_))
        ));
        assert!(matches!(
            session.edit_cell(0, OrderField::Size, "  "),
            Err(PosError::Validation(_))
        ));
    }

    #[test]
    fn test_item_rename_leaves_price_book_alone() {
        let mut session = Session::new();
        session.submit("A01", "Judy", "黑/Hitam", "M").unwrap();
        session.set_price("A01", 100, 250).unwrap();

        session.edit_cell(0, OrderField::ItemCode, "A02").unwrap();
        assert!(session.price_book().contains("A01"));
        assert!(!session.price_book().contains("A02"));
    }

    #[test]
    fn test_set_price_feeds_totals() {
        let mut session = Session::new();
        session.submit("A01", "Judy", "黑/Hitam", "M").unwrap();
        let before = summary::totals(session.ledger().records(), session.price_book());

        session.set_price("A01", 100, 250).unwrap();
        session.submit("A01", "Amy", "黑/Hitam", "L").unwrap();
        let after = summary::totals(session.ledger().records(), session.price_book());

        assert_eq!(after.revenue - before.revenue, 250 + 250);
        assert_eq!(after.cost - before.cost, 100 + 100);
        assert_eq!(after.profit() - before.profit(), 300);
    }
}
