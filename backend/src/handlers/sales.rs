//! Sales data handlers, including CSV export

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use shared::{
    export_filename, export_sales_csv, filter_by_range, parse_iso_date, summarize, DailyDetail,
    DateRange, SalesSummary,
};

use crate::error::AppResult;
use crate::services::SalesService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub format: Option<String>, // "json" or "csv"
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub window: Option<usize>,
}

/// Daily sales in the selected window, newest first
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> AppResult<Response> {
    let range = DateRange::from_bounds(query.from.as_deref(), query.to.as_deref())?;
    let records = SalesService::new(state.db.clone()).daily_sales().await?;

    if query.format.as_deref() == Some("csv") {
        let csv = export_sales_csv(&records, range.as_ref())?;
        let disposition = format!(
            "attachment; filename=\"{}.csv\"",
            export_filename(range.as_ref())
        );
        return Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response());
    }

    Ok(Json(filter_by_range(&records, range.as_ref())).into_response())
}

/// Best day, totals, rolling average and changes for the selected window
pub async fn get_sales_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<SalesSummary>> {
    let range = DateRange::from_bounds(query.from.as_deref(), query.to.as_deref())?;
    let window = query
        .window
        .unwrap_or(state.config.dashboard.rolling_window_days as usize);

    let records = SalesService::new(state.db.clone()).daily_sales().await?;
    Ok(Json(summarize(&records, range.as_ref(), window)))
}

/// Best sellers and totals for one day
pub async fn get_daily_detail(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DailyDetail>> {
    let date = parse_iso_date(&date)?;
    let detail = SalesService::new(state.db.clone())
        .daily_detail(date, state.config.dashboard.top_items_limit)
        .await?;
    Ok(Json(detail))
}
