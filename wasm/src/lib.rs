//! WebAssembly module for the Sales Dashboard
//!
//! Provides client-side computation for:
//! - Date-window filtering and sales summaries
//! - Day-over-day changes
//! - Stock status classification with local stock edits
//! - CSV export of the visible window
//!
//! Records cross the boundary as JSON strings in the shape the backend serves.

use shared::{DateRange, InventoryItem, MetricsResult, SalesRecord, StockOverrides};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::metrics::*;
pub use shared::models::*;
pub use shared::types::*;

fn to_js_error(err: shared::MetricsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_range(from: Option<String>, to: Option<String>) -> MetricsResult<Option<DateRange>> {
    DateRange::from_bounds(from.as_deref(), to.as_deref())
}

fn parse_records(records_json: &str) -> MetricsResult<Vec<SalesRecord>> {
    Ok(serde_json::from_str(records_json)?)
}

fn parse_items(items_json: &str) -> MetricsResult<Vec<InventoryItem>> {
    Ok(serde_json::from_str(items_json)?)
}

fn parse_overrides(overrides_json: Option<String>) -> MetricsResult<StockOverrides> {
    match overrides_json.as_deref().map(str::trim) {
        None | Some("") => Ok(StockOverrides::new()),
        Some(json) => Ok(serde_json::from_str(json)?),
    }
}

fn filter_sales_impl(records_json: &str, from: Option<String>, to: Option<String>) -> MetricsResult<String> {
    let records = parse_records(records_json)?;
    let range = parse_range(from, to)?;
    Ok(serde_json::to_string(&filter_by_range(&records, range.as_ref()))?)
}

fn summarize_sales_impl(
    records_json: &str,
    from: Option<String>,
    to: Option<String>,
    window_days: Option<u32>,
) -> MetricsResult<String> {
    let records = parse_records(records_json)?;
    let range = parse_range(from, to)?;
    let window = window_days.map_or(DEFAULT_ROLLING_WINDOW, |w| w as usize);
    Ok(serde_json::to_string(&summarize(&records, range.as_ref(), window))?)
}

fn classify_inventory_impl(items_json: &str, overrides_json: Option<String>) -> MetricsResult<String> {
    let items = parse_items(items_json)?;
    let overrides = parse_overrides(overrides_json)?;
    Ok(serde_json::to_string(&classify_inventory(&items, &overrides))?)
}

fn reorder_cost_impl(items_json: &str, overrides_json: Option<String>) -> MetricsResult<f64> {
    let items = parse_items(items_json)?;
    let overrides = parse_overrides(overrides_json)?;
    Ok(reorder_cost(&overrides.apply(&items)))
}

fn export_csv_impl(records_json: &str, from: Option<String>, to: Option<String>) -> MetricsResult<String> {
    let records = parse_records(records_json)?;
    let range = parse_range(from, to)?;
    export_sales_csv(&records, range.as_ref())
}

fn export_filename_impl(from: Option<String>, to: Option<String>) -> MetricsResult<String> {
    let range = parse_range(from, to)?;
    Ok(export_filename(range.as_ref()))
}

/// Filter sales records to a date window, newest first
#[wasm_bindgen]
pub fn filter_sales(records_json: &str, from: Option<String>, to: Option<String>) -> Result<String, JsValue> {
    filter_sales_impl(records_json, from, to).map_err(to_js_error)
}

/// Summarize the sales inside a date window
#[wasm_bindgen]
pub fn summarize_sales(
    records_json: &str,
    from: Option<String>,
    to: Option<String>,
    window_days: Option<u32>,
) -> Result<String, JsValue> {
    summarize_sales_impl(records_json, from, to, window_days).map_err(to_js_error)
}

/// Classify a single stock position
#[wasm_bindgen]
pub fn classify_stock_status(current_stock: f64, predicted_usage: f64, reorder_level: f64) -> String {
    let assessment = classify_stock(current_stock, predicted_usage, reorder_level);
    format!("{}", assessment.status)
}

/// Percentage change from `previous` to `current`
#[wasm_bindgen]
pub fn sales_change_percent(current: f64, previous: f64) -> f64 {
    percent_change(current, previous)
}

/// Classify every inventory row after applying local stock edits
#[wasm_bindgen]
pub fn classify_inventory_rows(items_json: &str, overrides_json: Option<String>) -> Result<String, JsValue> {
    classify_inventory_impl(items_json, overrides_json).map_err(to_js_error)
}

/// Estimated cost of reordering every item that is not in good standing
#[wasm_bindgen]
pub fn estimate_reorder_cost(items_json: &str, overrides_json: Option<String>) -> Result<f64, JsValue> {
    reorder_cost_impl(items_json, overrides_json).map_err(to_js_error)
}

/// Export the visible sales window as CSV
#[wasm_bindgen]
pub fn export_sales(records_json: &str, from: Option<String>, to: Option<String>) -> Result<String, JsValue> {
    export_csv_impl(records_json, from, to).map_err(to_js_error)
}

/// Suggested export file name for a date window
#[wasm_bindgen]
pub fn export_sales_filename(from: Option<String>, to: Option<String>) -> Result<String, JsValue> {
    export_filename_impl(from, to).map_err(to_js_error)
}
