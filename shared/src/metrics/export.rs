//! CSV export of the visible sales window

use crate::error::{MetricsError, MetricsResult};
use crate::models::SalesRecord;
use crate::types::DateRange;

use super::range::filter_by_range;

/// Column names, in field order
pub const EXPORT_HEADER: [&str; 5] = ["Date", "Day", "Total Sales", "Total Orders", "Avg Check"];

/// Render the records inside `range` as CSV, newest first.
///
/// Returns an empty string when no record falls inside the range.
pub fn export_sales_csv(records: &[SalesRecord], range: Option<&DateRange>) -> MetricsResult<String> {
    let visible = filter_by_range(records, range);
    if visible.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(EXPORT_HEADER)
        .map_err(|e| MetricsError::Export(format!("CSV write error: {}", e)))?;

    for record in &visible {
        wtr.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.day_of_week.to_string(),
            format!("{:.2}", record.total_sales),
            record.total_orders.to_string(),
            format!("{:.2}", record.avg_check),
        ])
        .map_err(|e| MetricsError::Export(format!("CSV write error: {}", e)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| MetricsError::Export(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| MetricsError::Export(format!("UTF-8 conversion error: {}", e)))
}

/// Suggested file name (without extension) for an export of `range`
pub fn export_filename(range: Option<&DateRange>) -> String {
    match range {
        Some(r) => format!("sales_{}-{}", r.start.format("%Y%m%d"), r.end.format("%Y%m%d")),
        None => "sales_all".to_string(),
    }
}
