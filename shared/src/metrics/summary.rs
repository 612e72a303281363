//! Sales page view model over a date window

use serde::{Deserialize, Serialize};

use crate::models::SalesRecord;
use crate::types::DateRange;

use super::aggregate::{best_day, rolling_average, sales_totals, BestDay, SalesTotals};
use super::change::{daily_changes, DailyChange};
use super::range::filter_by_range;

/// Everything the sales page renders for one date window. Field names are
/// camelCase on the wire, like the records it carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub records: Vec<SalesRecord>,
    pub best_day: BestDay,
    pub totals: SalesTotals,
    pub rolling_average: f64,
    pub window_days: usize,
    pub changes: Vec<DailyChange>,
}

pub fn summarize(records: &[SalesRecord], range: Option<&DateRange>, window_days: usize) -> SalesSummary {
    let records = filter_by_range(records, range);
    SalesSummary {
        best_day: best_day(&records),
        totals: sales_totals(&records),
        rolling_average: rolling_average(&records, window_days),
        window_days,
        changes: daily_changes(&records),
        records,
    }
}
