//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use shared::{inventory_report, InventoryItem, InventoryReport, StockOverrides};

use super::{optional_date, today, DateQuery};
use crate::error::AppResult;
use crate::services::{ForecastService, InventoryService};
use crate::AppState;

async fn load_inventory(state: &AppState, date: NaiveDate) -> AppResult<Vec<InventoryItem>> {
    let usage = ForecastService::new(state.forecaster.as_ref())
        .usage_for_day(date)
        .await;
    InventoryService::new(state.db.clone())
        .stock_positions(date, &usage)
        .await
}

/// Stock positions and predicted usage for a day (defaults to today)
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<Vec<InventoryItem>>> {
    let date = optional_date(query.date.as_deref())?.unwrap_or_else(today);
    Ok(Json(load_inventory(&state, date).await?))
}

/// Classified stock positions with the reorder estimate
pub async fn get_inventory_status(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> AppResult<Json<InventoryReport>> {
    let date = optional_date(query.date.as_deref())?.unwrap_or_else(today);
    let items = load_inventory(&state, date).await?;
    Ok(Json(inventory_report(&items, &StockOverrides::new())))
}
