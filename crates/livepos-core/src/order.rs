//! Order record data model.
//!
//! `OrderRecord` is the typed in-memory row held by the ledger. `SessionRow`
//! is the denormalized shape written to and read from session CSV files: the
//! same fields under the bilingual column headers the operators work with,
//! plus the optional sale-price / cost / profit columns that are resolved
//! from the price book at save time.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::price_book::PriceBook;

/// Timestamp format stamped on each record at submission (local clock).
const TIME_FORMAT: &str = "%H:%M:%S";

/// A single order taken during a live session.
///
/// Created on confirmed submission, mutated only via full-row replace or
/// removal, and owned exclusively by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub item_code: String,
    pub customer_name: String,
    pub color: String,
    pub size: String,
    /// Wall-clock time of submission, `HH:MM:SS`.
    pub timestamp: String,
}

impl OrderRecord {
    /// Build a record stamped with the current local time.
    pub fn new(
        item_code: impl Into<String>,
        customer_name: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(
            item_code,
            customer_name,
            color,
            size,
            Local::now().format(TIME_FORMAT).to_string(),
        )
    }

    /// Build a record with an explicit timestamp (used on load).
    pub fn with_timestamp(
        item_code: impl Into<String>,
        customer_name: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            customer_name: customer_name.into(),
            color: color.into(),
            size: size.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// A field of an order record, for cell-level edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    ItemCode,
    CustomerName,
    Color,
    Size,
    Timestamp,
}

impl OrderField {
    /// All editable fields, in display order.
    pub const ALL: [OrderField; 5] = [
        OrderField::ItemCode,
        OrderField::CustomerName,
        OrderField::Color,
        OrderField::Size,
        OrderField::Timestamp,
    ];

    /// Human-readable label matching the session-file column header.
    pub fn label(&self) -> &'static str {
        match self {
            OrderField::ItemCode => "貨號 / Kode",
            OrderField::CustomerName => "客人 / Nama",
            OrderField::Color => "顏色 / Warna",
            OrderField::Size => "尺寸 / Ukuran",
            OrderField::Timestamp => "時間 / Waktu",
        }
    }
}

/// One row of a session file.
///
/// The three numeric columns are optional on read: files saved before any
/// prices were tracked simply do not carry them, and such files load fine.
/// Signed integers are accepted so a hand-edited negative survives parsing;
/// the store clamps to zero when restoring the price book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRow {
    #[serde(rename = "貨號 / Kode")]
    pub item_code: String,
    #[serde(rename = "客人 / Nama")]
    pub customer_name: String,
    #[serde(rename = "顏色 / Warna")]
    pub color: String,
    #[serde(rename = "尺寸 / Ukuran")]
    pub size: String,
    #[serde(rename = "時間 / Waktu")]
    pub timestamp: String,
    #[serde(rename = "售價 / Harga", default)]
    pub price: Option<i64>,
    #[serde(rename = "成本 / Modal", default)]
    pub cost: Option<i64>,
    #[serde(rename = "利潤 / Untung", default)]
    pub profit: Option<i64>,
}

impl SessionRow {
    /// Denormalize a ledger record with price-book figures as of right now.
    ///
    /// This is a point-in-time snapshot, not a live link: later price edits
    /// do not rewrite rows already saved.
    pub fn denormalize(record: &OrderRecord, prices: &PriceBook) -> Self {
        let entry = prices.get(&record.item_code);
        Self {
            item_code: record.item_code.clone(),
            customer_name: record.customer_name.clone(),
            color: record.color.clone(),
            size: record.size.clone(),
            timestamp: record.timestamp.clone(),
            price: Some(entry.price as i64),
            cost: Some(entry.cost as i64),
            profit: Some(entry.profit()),
        }
    }

    /// Strip the denormalized columns and return the ledger record.
    pub fn into_record(self) -> OrderRecord {
        OrderRecord {
            item_code: self.item_code,
            customer_name: self.customer_name,
            color: self.color,
            size: self.size,
            timestamp: self.timestamp,
        }
    }
}
