//! Summary views derived from a ledger snapshot.
//!
//! Everything here is a pure function of the records handed in (plus the
//! price book for money figures) and is recomputed in full on every view
//! request. Ledgers hold one live session's worth of orders, so there is
//! no incremental maintenance.

use serde::Serialize;

use crate::order::OrderRecord;
use crate::price_book::PriceBook;
use crate::vocab::DEFAULT_SIZES;

/// Count for one (item, color, size) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripletCount {
    pub item_code: String,
    pub color: String,
    pub size: String,
    pub count: usize,
}

/// Counts grouped by (item_code, color, size), in snapshot encounter order.
pub fn triplet_counts(records: &[OrderRecord]) -> Vec<TripletCount> {
    let mut counts: Vec<TripletCount> = Vec::new();
    for record in records {
        let position = counts.iter().position(|c| {
            c.item_code == record.item_code && c.color == record.color && c.size == record.size
        });
        match position {
            Some(i) => counts[i].count += 1,
            None => counts.push(TripletCount {
                item_code: record.item_code.clone(),
                color: record.color.clone(),
                size: record.size.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// One row of the size pivot: counts per size column for an
/// (item_code, color) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotRow {
    pub item_code: String,
    pub color: String,
    /// Aligned with `SizePivot::sizes`.
    pub counts: Vec<usize>,
    pub total: usize,
}

/// Size-pivoted count matrix over a ledger snapshot.
///
/// Columns are the default sizes first, then any non-standard sizes in
/// encounter order, so odd one-off sizes stay visible instead of being
/// folded into a single bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizePivot {
    pub sizes: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl SizePivot {
    /// Count for a given (item, color, size) cell; zero when absent.
    pub fn count(&self, item_code: &str, color: &str, size: &str) -> usize {
        let Some(column) = self.sizes.iter().position(|s| s == size) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|row| row.item_code == item_code && row.color == color)
            .map(|row| row.counts[column])
            .unwrap_or(0)
    }
}

/// Build the size pivot for a snapshot.
pub fn size_pivot(records: &[OrderRecord]) -> SizePivot {
    let mut sizes: Vec<String> = DEFAULT_SIZES.iter().map(|s| s.to_string()).collect();
    for record in records {
        if !sizes.iter().any(|s| *s == record.size) {
            sizes.push(record.size.clone());
        }
    }

    let mut rows: Vec<PivotRow> = Vec::new();
    for record in records {
        // Every size was interned above, so the position always resolves.
        let Some(column) = sizes.iter().position(|s| *s == record.size) else {
            continue;
        };
        let position = rows
            .iter()
            .position(|row| row.item_code == record.item_code && row.color == record.color);
        let index = match position {
            Some(i) => i,
            None => {
                rows.push(PivotRow {
                    item_code: record.item_code.clone(),
                    color: record.color.clone(),
                    counts: vec![0; sizes.len()],
                    total: 0,
                });
                rows.len() - 1
            }
        };
        rows[index].counts[column] += 1;
        rows[index].total += 1;
    }

    SizePivot { sizes, rows }
}

/// Session-wide money figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub records: usize,
    pub revenue: u64,
    pub cost: u64,
}

impl Totals {
    /// Revenue minus cost; negative when the session sells below cost.
    pub fn profit(&self) -> i64 {
        self.revenue as i64 - self.cost as i64
    }
}

/// Global totals over a snapshot: record count, summed revenue and cost
/// via price-book lookup per record.
pub fn totals(records: &[OrderRecord], prices: &PriceBook) -> Totals {
    let mut result = Totals {
        records: records.len(),
        ..Totals::default()
    };
    for record in records {
        let entry = prices.get(&record.item_code);
        result.revenue += entry.price;
        result.cost += entry.cost;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item: &str, color: &str, size: &str) -> OrderRecord {
        OrderRecord::with_timestamp(item, "Judy", color, size, "12:00:00")
    }

    #[test]
    fn test_triplet_counts_group_in_encounter_order() {
        let records = vec![
            record("A01", "黑/Hitam", "M"),
            record("B02", "白/Putih", "S"),
            record("A01", "黑/Hitam", "M"),
        ];

        let counts = triplet_counts(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].item_code, "A01");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].item_code, "B02");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_pivot_single_order() {
        let records = vec![record("A01", "黑/Hitam", "M")];
        let pivot = size_pivot(&records);

        assert_eq!(pivot.count("A01", "黑/Hitam", "M"), 1);
        assert_eq!(pivot.rows[0].total, 1);
    }

    #[test]
    fn test_pivot_standard_sizes_come_first() {
        let records = vec![
            record("A01", "黑/Hitam", "5XL"),
            record("A01", "黑/Hitam", "M"),
            record("A01", "黑/Hitam", "Free"),
        ];
        let pivot = size_pivot(&records);

        let standard = DEFAULT_SIZES.len();
        assert_eq!(&pivot.sizes[..standard], DEFAULT_SIZES);
        // Non-standard sizes trail in encounter order
        assert_eq!(pivot.sizes[standard], "5XL");
        assert_eq!(pivot.sizes[standard + 1], "Free");
        assert_eq!(pivot.count("A01", "黑/Hitam", "5XL"), 1);
        assert_eq!(pivot.rows[0].total, 3);
    }

    #[test]
    fn test_pivot_rows_split_by_item_and_color() {
        let records = vec![
            record("A01", "黑/Hitam", "M"),
            record("A01", "白/Putih", "M"),
            record("A01", "黑/Hitam", "L"),
        ];
        let pivot = size_pivot(&records);

        assert_eq!(pivot.rows.len(), 2);
        assert_eq!(pivot.count("A01", "黑/Hitam", "M"), 1);
        assert_eq!(pivot.count("A01", "黑/Hitam", "L"), 1);
        assert_eq!(pivot.count("A01", "白/Putih", "M"), 1);
    }

    #[test]
    fn test_totals_sum_via_price_book() {
        let mut prices = PriceBook::new();
        prices.set("A01", 100, 250);

        let records = vec![
            record("A01", "黑/Hitam", "M"),
            record("A01", "白/Putih", "L"),
            // Unpriced item reads as zeros
            record("Z99", "灰/Abu", "S"),
        ];

        let figures = totals(&records, &prices);
        assert_eq!(figures.records, 3);
        assert_eq!(figures.revenue, 500);
        assert_eq!(figures.cost, 200);
        assert_eq!(figures.profit(), 300);
    }

    #[test]
    fn test_totals_empty_snapshot() {
        let figures = totals(&[], &PriceBook::new());
        assert_eq!(figures, Totals::default());
    }
}
