//! Single-day sales prediction handler

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::parse_iso_date;

use crate::error::{AppError, AppResult};
use crate::services::ForecastService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub prediction_date: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub date: NaiveDate,
    pub predicted_sales: f64,
}

/// Predict total sales for one day
pub async fn predict_sales(
    State(state): State<AppState>,
    Json(input): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let raw = input
        .prediction_date
        .or(input.date)
        .ok_or_else(|| AppError::invalid_date("prediction_date"))?;
    let date = parse_iso_date(&raw).map_err(|_| AppError::invalid_date("prediction_date"))?;

    let predicted_sales = ForecastService::new(state.forecaster.as_ref())
        .predict(date)
        .await?;

    Ok(Json(PredictResponse {
        date,
        predicted_sales,
    }))
}
