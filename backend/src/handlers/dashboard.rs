//! Dashboard overview handlers

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{day_of_week_data, DayOfWeekSales, DaySnapshot, WeeklyForecastItem};

use super::{optional_date, today, DateQuery};
use crate::error::AppResult;
use crate::services::{ForecastService, SalesService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub start_date: Option<String>,
    pub date: Option<String>,
}

/// Total sales for one day of the trend chart
#[derive(Debug, Serialize)]
pub struct SalesTrendPoint {
    pub order_date: NaiveDate,
    pub sales: f64,
}

/// Everything shown on the overview page
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub today_sales: f64,
    pub total_orders: u64,
    pub avg_check: f64,
    pub weekly_forecast: Vec<WeeklyForecastItem>,
    pub sales_trend: Vec<SalesTrendPoint>,
    pub day_of_week_data: Vec<DayOfWeekSales>,
}

/// Today's numbers, the forecast from the start date and the sales trend
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<DashboardStats>> {
    let requested = query.start_date.as_deref().or(query.date.as_deref());
    let today = today();
    let start = optional_date(requested)?.unwrap_or(today);

    let sales = SalesService::new(state.db.clone());
    let DaySnapshot {
        today_sales,
        total_orders,
        avg_check,
    } = sales.day_totals(today).await?.blended_snapshot();

    let sales_trend = sales
        .daily_sales()
        .await?
        .into_iter()
        .map(|record| SalesTrendPoint {
            order_date: record.date,
            sales: record.total_sales,
        })
        .collect();

    let weekly_forecast = ForecastService::new(state.forecaster.as_ref())
        .weekly_forecast(start, state.config.dashboard.forecast_horizon_days)
        .await;

    Ok(Json(DashboardStats {
        today_sales,
        total_orders,
        avg_check,
        day_of_week_data: day_of_week_data(&weekly_forecast),
        weekly_forecast,
        sales_trend,
    }))
}

/// Headline numbers for a day (defaults to today)
pub async fn get_sales_for_date(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<DaySnapshot>> {
    let date = optional_date(query.date.as_deref())?.unwrap_or_else(today);
    let totals = SalesService::new(state.db.clone()).day_totals(date).await?;
    Ok(Json(totals.line_average_snapshot()))
}
