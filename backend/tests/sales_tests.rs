//! Sales metrics tests
//!
//! Tests for the sales page computations including:
//! - Date window filtering and ordering
//! - Best day, totals and rolling average
//! - Day-over-day changes
//! - CSV export

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shared::{
    best_day, daily_changes, export_sales_csv, filter_by_range, percent_change, rolling_average,
    sales_totals, summarize, DateRange, SalesRecord, Trend, DEFAULT_ROLLING_WINDOW,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn record(date: &str, sales: f64, orders: u64) -> SalesRecord {
    let avg = if orders > 0 { sales / orders as f64 } else { 0.0 };
    SalesRecord::new(day(date), sales, orders, avg)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Records come back newest first and the previous day drives the change
    #[test]
    fn test_two_day_change() {
        let records = vec![record("2024-01-01", 80.0, 8), record("2024-01-02", 100.0, 10)];

        let sorted = filter_by_range(&records, None);
        assert_eq!(sorted[0].date, day("2024-01-02"));
        assert_eq!(sorted[1].date, day("2024-01-01"));

        let changes = daily_changes(&sorted);
        assert_eq!(changes[0].change_percent, Some(25.0));
        assert_eq!(changes[0].trend, Some(Trend::Up));
        assert_eq!(changes[1].change_percent, None);
    }

    /// Empty input yields zero-valued aggregates
    #[test]
    fn test_empty_collection() {
        let best = best_day(&[]);
        assert_eq!(best.sales, 0.0);
        assert_eq!(best.day_of_week, "-");
        assert!(best.date.is_none());

        let totals = sales_totals(&[]);
        assert_eq!(totals.total_orders, 0);
        assert_eq!(totals.avg_check, 0.0);

        assert_eq!(rolling_average(&[], DEFAULT_ROLLING_WINDOW), 0.0);
        assert!(daily_changes(&[]).is_empty());
    }

    /// Both window bounds are inclusive
    #[test]
    fn test_range_bounds_inclusive() {
        let records = vec![
            record("2024-01-01", 10.0, 1),
            record("2024-01-02", 20.0, 2),
            record("2024-01-03", 30.0, 3),
            record("2024-01-04", 40.0, 4),
        ];
        let range = DateRange::parse("2024-01-02", "2024-01-03").unwrap();

        let visible = filter_by_range(&records, Some(&range));
        let dates: Vec<NaiveDate> = visible.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day("2024-01-03"), day("2024-01-02")]);
    }

    /// Malformed bounds are rejected rather than ignored
    #[test]
    fn test_malformed_bounds_rejected() {
        assert!(DateRange::parse("2024-01-02", "January 3").is_err());
        assert!(DateRange::from_bounds(Some("2024-13-40"), Some("2024-01-03")).is_err());
    }

    /// A window is active only with both bounds
    #[test]
    fn test_single_bound_means_no_window() {
        assert_eq!(DateRange::from_bounds(Some("2024-01-02"), None).unwrap(), None);
        assert_eq!(DateRange::from_bounds(None, None).unwrap(), None);
    }

    /// Ties go to the most recent day
    #[test]
    fn test_best_day_tie() {
        let sorted = filter_by_range(
            &[record("2024-01-01", 90.0, 9), record("2024-01-02", 90.0, 3)],
            None,
        );
        let best = best_day(&sorted);
        assert_eq!(best.date, Some(day("2024-01-02")));
        assert_eq!(best.day_of_week, "Tue");
    }

    /// Blended average check ignores per-row averages
    #[test]
    fn test_blended_average_check() {
        let records = vec![
            SalesRecord::new(day("2024-01-01"), 100.0, 4, 99.0),
            SalesRecord::new(day("2024-01-02"), 60.0, 4, 1.0),
        ];

        let totals = sales_totals(&records);
        assert_eq!(totals.total_orders, 8);
        assert_eq!(totals.total_sales, 160.0);
        assert_eq!(totals.avg_check, 20.0);
    }

    /// Rolling average covers only the most recent records present
    #[test]
    fn test_rolling_average_uses_most_recent() {
        let records: Vec<SalesRecord> = (1..=10)
            .map(|d| record(&format!("2024-01-{:02}", d), d as f64 * 10.0, 1))
            .collect();
        let sorted = filter_by_range(&records, None);

        // days 10 down to 4
        assert!((rolling_average(&sorted, 7) - 70.0).abs() < 1e-9);
        assert!((rolling_average(&sorted[..3], 7) - 90.0).abs() < 1e-9);
    }

    /// Zero previous sales gives a flat change
    #[test]
    fn test_change_from_zero_is_flat() {
        let sorted = filter_by_range(&[record("2024-01-01", 0.0, 0), record("2024-01-02", 50.0, 5)], None);
        let changes = daily_changes(&sorted);

        assert_eq!(changes[0].change_percent, Some(0.0));
        assert_eq!(changes[0].trend, Some(Trend::Flat));
    }

    /// Export follows the window order with two-decimal amounts
    #[test]
    fn test_export_rows() {
        let records = vec![
            SalesRecord::new(day("2024-01-01"), 80.0, 8, 10.0),
            SalesRecord::new(day("2024-01-02"), 100.5, 10, 10.05),
        ];

        let csv = export_sales_csv(&records, None).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Day,Total Sales,Total Orders,Avg Check");
        assert_eq!(lines[1], "2024-01-02,Tue,100.50,10,10.05");
        assert_eq!(lines[2], "2024-01-01,Mon,80.00,8,10.00");
    }

    /// Nothing to export produces no output
    #[test]
    fn test_export_empty_window() {
        let records = vec![record("2024-01-01", 80.0, 8)];
        let range = DateRange::parse("2024-02-01", "2024-02-29").unwrap();

        assert_eq!(export_sales_csv(&records, Some(&range)).unwrap(), "");
    }

    /// Records from the API tolerate missing and textual numbers
    #[test]
    fn test_record_deserialization() {
        let json = r#"{"date":"2024-01-03","totalSales":"125.5","totalOrders":null,"avgCheck":12}"#;
        let parsed: SalesRecord = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.total_sales, 125.5);
        assert_eq!(parsed.total_orders, 0);
        assert_eq!(parsed.day_of_week, chrono::Weekday::Wed);
    }

    /// Summary combines every aggregate over the same window
    #[test]
    fn test_summary() {
        let records = vec![
            record("2024-01-01", 80.0, 8),
            record("2024-01-02", 100.0, 10),
            record("2024-01-03", 60.0, 6),
        ];
        let range = DateRange::parse("2024-01-02", "2024-01-03").unwrap();

        let summary = summarize(&records, Some(&range), DEFAULT_ROLLING_WINDOW);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.best_day.sales, 100.0);
        assert_eq!(summary.totals.total_orders, 16);
        assert!((summary.rolling_average - 80.0).abs() < 1e-9);
        assert!((summary.changes[0].change_percent.unwrap() + 40.0).abs() < 1e-9);
        assert_eq!(summary.changes[0].trend, Some(Trend::Down));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for a series of unique days with sales
    fn series_strategy() -> impl Strategy<Value = Vec<SalesRecord>> {
        prop::collection::btree_map(0i64..120, (0u32..500_000u32, 0u64..500), 0..40).prop_map(|days| {
            let origin = day("2024-01-01");
            days.into_iter()
                .map(|(offset, (cents, orders))| {
                    SalesRecord::new(origin + Duration::days(offset), cents as f64 / 100.0, orders, 0.0)
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Filtered output is newest first and inside the window
        #[test]
        fn prop_range_filter_sorted_and_bounded(
            records in series_strategy(),
            start in 0i64..120,
            len in 0i64..60
        ) {
            let origin = day("2024-01-01");
            let range = DateRange::new(origin + Duration::days(start), origin + Duration::days(start + len));
            let visible = filter_by_range(&records, Some(&range));

            for pair in visible.windows(2) {
                prop_assert!(pair[0].date > pair[1].date);
            }
            for r in &visible {
                prop_assert!(r.date >= range.start && r.date <= range.end);
            }
            let expected = records.iter().filter(|r| range.contains(r.date)).count();
            prop_assert_eq!(visible.len(), expected);
        }

        /// Filtering never changes the input
        #[test]
        fn prop_range_filter_leaves_input(records in series_strategy()) {
            let before = records.clone();
            let _ = filter_by_range(&records, None);
            prop_assert_eq!(records, before);
        }

        /// A window wider than the collection averages every record
        #[test]
        fn prop_short_collection_rolling_average(records in series_strategy()) {
            prop_assume!(!records.is_empty());
            let sorted = filter_by_range(&records, None);
            let mean = sorted.iter().map(|r| r.total_sales).sum::<f64>() / sorted.len() as f64;

            let avg = rolling_average(&sorted, sorted.len() + 5);
            prop_assert!((avg - mean).abs() < 1e-6);
        }

        /// Best day has the maximum sales
        #[test]
        fn prop_best_day_is_maximum(records in series_strategy()) {
            let best = best_day(&records);
            for r in &records {
                prop_assert!(best.sales >= r.total_sales);
            }
        }

        /// Changes are always finite and zero when the previous day is zero
        #[test]
        fn prop_change_render_safe(current in 0u32..100_000u32, previous in 0u32..100_000u32) {
            let change = percent_change(current as f64, previous as f64);
            prop_assert!(change.is_finite());
            if previous == 0 {
                prop_assert_eq!(change, 0.0);
            }
        }

        /// Only the earliest day lacks a change
        #[test]
        fn prop_earliest_day_has_no_change(records in series_strategy()) {
            let sorted = filter_by_range(&records, None);
            let changes = daily_changes(&sorted);

            prop_assert_eq!(changes.len(), sorted.len());
            for (i, change) in changes.iter().enumerate() {
                prop_assert_eq!(change.change_percent.is_none(), i + 1 == changes.len());
            }
        }

        /// Export has a header plus one line per visible record
        #[test]
        fn prop_export_line_count(records in series_strategy()) {
            let csv = export_sales_csv(&records, None).unwrap();
            if records.is_empty() {
                prop_assert!(csv.is_empty());
            } else {
                prop_assert_eq!(csv.lines().count(), records.len() + 1);
            }
        }
    }
}
