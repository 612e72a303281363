//! Weekly sales forecast entries

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::round2;
use crate::validation::number_or_zero;

/// One day of the weekly forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyForecastItem {
    /// Short weekday label, e.g. `Mon`
    pub day: String,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub amount: f64,
    /// Absolute change against the previous day of the forecast
    #[serde(default, deserialize_with = "number_or_zero")]
    pub change: f64,
    /// Present when the entry is provisional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WeeklyForecastItem {
    pub fn is_provisional(&self) -> bool {
        self.error.is_some()
    }
}

/// Why a forecast day has no prediction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastIssue {
    /// No forecasting service is configured
    NoModel,
    /// The forecasting service failed for this day
    PredictError(String),
}

impl std::fmt::Display for ForecastIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastIssue::NoModel => write!(f, "no_model"),
            ForecastIssue::PredictError(msg) => write!(f, "predict_error:{}", msg),
        }
    }
}

/// The outcome of asking the forecaster about one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayPrediction {
    pub date: NaiveDate,
    pub outcome: Result<f64, Vec<ForecastIssue>>,
}

/// Sales per weekday as plotted by the weekday chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayOfWeekSales {
    pub day: String,
    pub sales: f64,
}

/// Consecutive days starting at `start`
pub fn forecast_dates(start: NaiveDate, horizon_days: u32) -> Vec<NaiveDate> {
    (0..i64::from(horizon_days))
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// Turn raw predictions into forecast entries.
///
/// Failed days carry an amount of zero and an `error` marker; they still take
/// part in the day-to-day change so the chart stays continuous.
pub fn assemble_weekly_forecast(predictions: &[DayPrediction]) -> Vec<WeeklyForecastItem> {
    let mut forecast: Vec<WeeklyForecastItem> = Vec::with_capacity(predictions.len());

    for prediction in predictions {
        let (amount, error) = match &prediction.outcome {
            Ok(value) => (round2(*value), None),
            Err(issues) => (
                0.0,
                Some(
                    issues
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(","),
                ),
            ),
        };

        let previous = forecast.last().map(|item| item.amount).unwrap_or(amount);

        forecast.push(WeeklyForecastItem {
            day: prediction.date.weekday().to_string(),
            date: prediction.date,
            amount,
            change: round2(amount - previous),
            error,
        });
    }

    forecast
}

/// Project the forecast onto the weekday chart
pub fn day_of_week_data(forecast: &[WeeklyForecastItem]) -> Vec<DayOfWeekSales> {
    forecast
        .iter()
        .map(|item| DayOfWeekSales {
            day: item.day.clone(),
            sales: item.amount,
        })
        .collect()
}
