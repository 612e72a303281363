//! HTTP handlers for the Sales Dashboard API

mod dashboard;
mod forecast;
mod health;
mod inventory;
mod sales;

pub use dashboard::*;
pub use forecast::*;
pub use health::*;
pub use inventory::*;
pub use sales::*;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::parse_iso_date;

use crate::error::AppResult;

/// `?date=YYYY-MM-DD`
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Parse an optional query date; blank counts as absent
fn optional_date(value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(parse_iso_date(raw)?)),
    }
}

/// Today in the server's local time zone
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
