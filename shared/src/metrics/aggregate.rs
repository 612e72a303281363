//! Aggregates over a filtered record set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{InventoryItem, SalesRecord};

/// Number of most recent days in the rolling average
pub const DEFAULT_ROLLING_WINDOW: usize = 7;

/// Label shown for the best day when there is no data
pub const NO_DAY_LABEL: &str = "-";

/// Highest-selling day of a record set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestDay {
    pub date: Option<NaiveDate>,
    pub sales: f64,
    pub day_of_week: String,
}

impl Default for BestDay {
    fn default() -> Self {
        Self {
            date: None,
            sales: 0.0,
            day_of_week: NO_DAY_LABEL.to_string(),
        }
    }
}

/// Totals across a record set
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    pub total_orders: u64,
    pub total_sales: f64,
    /// Blended average check, `total_sales / total_orders`. Not derived from
    /// any record's own `avg_check`.
    pub avg_check: f64,
}

/// The record with the highest sales. Ties go to the earliest position in
/// the input, which is the most recent day for newest-first input.
pub fn best_day(records: &[SalesRecord]) -> BestDay {
    let mut best: Option<&SalesRecord> = None;
    for record in records {
        match best {
            Some(current) if record.total_sales <= current.total_sales => {}
            _ => best = Some(record),
        }
    }

    best.map(|record| BestDay {
        date: Some(record.date),
        sales: record.total_sales,
        day_of_week: record.day_of_week.to_string(),
    })
    .unwrap_or_default()
}

pub fn sales_totals(records: &[SalesRecord]) -> SalesTotals {
    let total_orders = records
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.total_orders));
    let total_sales: f64 = records.iter().map(|r| r.total_sales).sum();
    let avg_check = if total_orders > 0 {
        total_sales / total_orders as f64
    } else {
        0.0
    };

    SalesTotals {
        total_orders,
        total_sales,
        avg_check,
    }
}

/// Average sales over the first `window` records. Days are counted as
/// records present, not calendar days.
pub fn rolling_average(records: &[SalesRecord], window: usize) -> f64 {
    let recent = &records[..window.min(records.len())];
    let sum: f64 = recent.iter().map(|r| r.total_sales).sum();
    sum / recent.len().max(1) as f64
}

/// Cost of topping every item that is not `Good` up to twice its reorder
/// level. Negative unit costs count as zero.
pub fn reorder_cost(items: &[InventoryItem]) -> f64 {
    items
        .iter()
        .filter(|item| item.assess().status.needs_reorder())
        .map(|item| {
            let need = (item.reorder_level * 2.0 - item.current_stock).max(0.0);
            need * item.cost.max(0.0)
        })
        .sum()
}
