//! Common types used across the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MetricsResult;
use crate::validation::parse_iso_date;

/// Inclusive date range selected in the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range from two ISO day strings
    pub fn parse(start: &str, end: &str) -> MetricsResult<Self> {
        Ok(Self::new(parse_iso_date(start)?, parse_iso_date(end)?))
    }

    /// Build an optional range from optional bounds.
    ///
    /// A range is only active when both bounds are present.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> MetricsResult<Option<Self>> {
        match (start, end) {
            (Some(start), Some(end)) => Self::parse(start, end).map(Some),
            _ => Ok(None),
        }
    }

    /// Both bounds are inclusive; an inverted range contains nothing
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Round to two decimal places, the precision shown for currency
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
