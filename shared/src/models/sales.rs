//! Daily sales records

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::validation::{count_or_zero, number_or_zero};

/// One calendar day of sales; `date` is unique within a series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "RawSalesRecord")]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub total_orders: u64,
    /// Average check as reported by the source. Taken as given, it may not
    /// equal `total_sales / total_orders`.
    pub avg_check: f64,
    pub day_of_week: Weekday,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, total_sales: f64, total_orders: u64, avg_check: f64) -> Self {
        Self {
            date,
            total_sales,
            total_orders,
            avg_check,
            day_of_week: date.weekday(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSalesRecord {
    date: NaiveDate,
    #[serde(default, deserialize_with = "number_or_zero")]
    total_sales: f64,
    #[serde(default, deserialize_with = "count_or_zero")]
    total_orders: u64,
    #[serde(default, deserialize_with = "number_or_zero")]
    avg_check: f64,
    #[serde(default)]
    day_of_week: Option<Weekday>,
}

impl From<RawSalesRecord> for SalesRecord {
    fn from(raw: RawSalesRecord) -> Self {
        Self {
            date: raw.date,
            total_sales: raw.total_sales,
            total_orders: raw.total_orders,
            avg_check: raw.avg_check,
            day_of_week: raw.day_of_week.unwrap_or_else(|| raw.date.weekday()),
        }
    }
}

/// A best-selling item on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopItem {
    #[serde(alias = "pizza_name")]
    pub name: String,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub quantity: u64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub revenue: f64,
}

/// Read-only breakdown of a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyDetail {
    #[serde(rename = "topPizzas", default)]
    pub top_items: Vec<TopItem>,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub avg_check: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_sales: f64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_orders: u64,
}

/// Headline numbers for one day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DaySnapshot {
    #[serde(default, deserialize_with = "number_or_zero")]
    pub today_sales: f64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub avg_check: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_row() {
        let json = r#"{"date":"2024-01-02","totalSales":100.5,"totalOrders":12,"avgCheck":8.38,"dayOfWeek":"Tuesday"}"#;
        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(record.total_sales, 100.5);
        assert_eq!(record.total_orders, 12);
        assert_eq!(record.avg_check, 8.38);
        assert_eq!(record.day_of_week, Weekday::Tue);
    }

    #[test]
    fn test_missing_numbers_become_zero() {
        let json = r#"{"date":"2024-01-02","totalSales":null,"dayOfWeek":"Tue"}"#;
        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_sales, 0.0);
        assert_eq!(record.total_orders, 0);
        assert_eq!(record.avg_check, 0.0);
    }

    #[test]
    fn test_day_of_week_falls_back_to_date() {
        let record: SalesRecord = serde_json::from_str(r#"{"date":"2024-01-06"}"#).unwrap();
        assert_eq!(record.day_of_week, Weekday::Sat);
    }

    #[test]
    fn test_missing_or_bad_date_is_rejected() {
        assert!(serde_json::from_str::<SalesRecord>(r#"{"totalSales":5}"#).is_err());
        assert!(serde_json::from_str::<SalesRecord>(r#"{"date":"01/02/2024"}"#).is_err());
    }

    #[test]
    fn test_daily_detail_accepts_pizza_name() {
        let json = r#"{
            "topPizzas": [{"pizza_name": "The Hawaiian Pizza", "quantity": 14, "revenue": 230.5}],
            "avg_check": 16.2,
            "total_sales": 980.1,
            "total_orders": 41
        }"#;
        let detail: DailyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.top_items.len(), 1);
        assert_eq!(detail.top_items[0].name, "The Hawaiian Pizza");
        assert_eq!(detail.top_items[0].quantity, 14);
        assert_eq!(detail.total_orders, 41);

        let out = serde_json::to_value(&detail).unwrap();
        assert!(out.get("topPizzas").is_some());
    }
}
