//! Day-over-day sales changes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SalesRecord;

/// Visual direction of a change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Trend::Up
        } else if change_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Change of one day against the day before it in the window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyChange {
    pub date: NaiveDate,
    /// `None` for the earliest day, which has no predecessor
    pub change_percent: Option<f64>,
    pub trend: Option<Trend>,
}

/// Percentage change from `previous` to `current`; zero when `previous` is zero
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    let change = (current - previous) / previous * 100.0;
    if change.is_finite() {
        change
    } else {
        0.0
    }
}

/// Changes for newest-first records. The chronological predecessor of each
/// record is the next element of the slice.
pub fn daily_changes(records: &[SalesRecord]) -> Vec<DailyChange> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let change_percent = records
                .get(i + 1)
                .map(|previous| percent_change(record.total_sales, previous.total_sales));
            DailyChange {
                date: record.date,
                change_percent,
                trend: change_percent.map(Trend::of),
            }
        })
        .collect()
}
