//! Domain tables: order list, triplet counts, size pivot, totals.

use livepos_core::summary::{SizePivot, Totals, TripletCount};
use livepos_core::{OrderField, OrderRecord, PriceBook};

use super::context::UiContext;
use super::render::{kv, table};

/// The order list, newest first, with a leading row number for edits.
pub fn order_table(ctx: &UiContext, records: &[OrderRecord]) -> String {
    let mut headers = vec!["#".to_string()];
    headers.extend(OrderField::ALL.iter().map(|f| f.label().to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.item_code.clone(),
                r.customer_name.clone(),
                r.color.clone(),
                r.size.clone(),
                r.timestamp.clone(),
            ]
        })
        .collect();
    table(ctx, &headers, &rows)
}

/// Counts per (item, color, size) combination.
pub fn triplet_table(ctx: &UiContext, counts: &[TripletCount]) -> String {
    let headers: Vec<String> = ["貨號 / Kode", "顏色 / Warna", "尺寸 / Ukuran", "數量 / Qty"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|c| {
            vec![
                c.item_code.clone(),
                c.color.clone(),
                c.size.clone(),
                c.count.to_string(),
            ]
        })
        .collect();
    table(ctx, &headers, &rows)
}

/// The size pivot matrix; zero cells render blank to keep it scannable.
pub fn pivot_table(ctx: &UiContext, pivot: &SizePivot) -> String {
    let mut headers = vec!["貨號 / Kode".to_string(), "顏色 / Warna".to_string()];
    headers.extend(pivot.sizes.iter().cloned());
    headers.push("Total".to_string());

    let rows: Vec<Vec<String>> = pivot
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.item_code.clone(), row.color.clone()];
            cells.extend(row.counts.iter().map(|&count| {
                if count == 0 {
                    String::new()
                } else {
                    count.to_string()
                }
            }));
            cells.push(row.total.to_string());
            cells
        })
        .collect();
    table(ctx, &headers, &rows)
}

/// Session totals as key-value lines.
pub fn totals_lines(ctx: &UiContext, totals: &Totals) -> String {
    [
        kv(ctx, "Orders", &totals.records.to_string()),
        kv(ctx, "Revenue", &totals.revenue.to_string()),
        kv(ctx, "Cost", &totals.cost.to_string()),
        kv(ctx, "Profit", &totals.profit().to_string()),
    ]
    .join("\n")
}

/// Per-item price figures for the live view.
pub fn price_line(prices: &PriceBook, item_code: &str) -> String {
    let entry = prices.get(item_code);
    format!(
        "{}: cost {} / price {} / profit {}",
        item_code,
        entry.cost,
        entry.price,
        entry.profit()
    )
}
