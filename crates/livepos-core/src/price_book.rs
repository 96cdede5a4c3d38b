//! Per-item cost and price lookup.
//!
//! The price book lives beside the ledger, keyed by item code. Profit is
//! never stored; it is recomputed from cost and price on every read.
//! Missing entries read as zeros so aggregation never has to special-case
//! items that were ordered before a price was set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Cost and sale price for one item code. Amounts are whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub cost: u64,
    pub price: u64,
}

impl PriceEntry {
    pub fn new(cost: u64, price: u64) -> Self {
        Self { cost, price }
    }

    /// Margin per unit; negative when an item sells below cost.
    pub fn profit(&self) -> i64 {
        self.price as i64 - self.cost as i64
    }
}

/// Mapping from item code to cost/price, independent of the ledger.
///
/// Deleting or renaming ledger rows never cascades here; the item code is
/// a soft key only.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    entries: HashMap<String, PriceEntry>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Figures for an item, zeros when unset.
    pub fn get(&self, item_code: &str) -> PriceEntry {
        self.entries.get(item_code).copied().unwrap_or_default()
    }

    /// Overwrite the figures for an item.
    pub fn set(&mut self, item_code: impl Into<String>, cost: u64, price: u64) {
        self.entries
            .insert(item_code.into(), PriceEntry::new(cost, price));
    }

    /// Create a zeroed entry on first encounter of an item code, leaving
    /// any existing figures alone.
    pub fn ensure_default(&mut self, item_code: &str) {
        if !self.entries.contains_key(item_code) {
            self.entries
                .insert(item_code.to_string(), PriceEntry::default());
        }
    }

    /// Whether an explicit entry exists (as opposed to the zero fallback).
    pub fn contains(&self, item_code: &str) -> bool {
        self.entries.contains_key(item_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
