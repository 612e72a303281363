//! Forecast service: weekly sales forecast, single-day predictions and
//! predicted ingredient usage

use std::collections::HashMap;
use std::future::Future;

use chrono::NaiveDate;
use shared::{
    assemble_weekly_forecast, forecast_dates, round2, DayPrediction, ForecastIssue,
    WeeklyForecastItem,
};

use crate::error::{AppError, AppResult};

/// A source of sales and usage predictions for a calendar day
pub trait SalesPredictor: Send + Sync {
    fn predict_sales(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<f64, ForecastIssue>> + Send;

    /// Predicted usage per ingredient name
    fn predict_usage(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<HashMap<String, f64>, ForecastIssue>> + Send;
}

/// Forecast service over any predictor
pub struct ForecastService<'a, P> {
    predictor: &'a P,
}

impl<'a, P: SalesPredictor> ForecastService<'a, P> {
    pub fn new(predictor: &'a P) -> Self {
        Self { predictor }
    }

    /// Forecast `horizon_days` consecutive days starting at `start`.
    ///
    /// Days the predictor cannot answer are returned as provisional entries.
    pub async fn weekly_forecast(&self, start: NaiveDate, horizon_days: u32) -> Vec<WeeklyForecastItem> {
        let mut predictions = Vec::with_capacity(horizon_days as usize);

        for date in forecast_dates(start, horizon_days) {
            let outcome = self.predictor.predict_sales(date).await.map_err(|issue| {
                tracing::warn!(%date, issue = %issue, "weekly forecast entry is provisional");
                vec![issue]
            });
            predictions.push(DayPrediction { date, outcome });
        }

        assemble_weekly_forecast(&predictions)
    }

    /// Predicted sales for a single day, rounded to cents
    pub async fn predict(&self, date: NaiveDate) -> AppResult<f64> {
        match self.predictor.predict_sales(date).await {
            Ok(amount) => Ok(round2(amount)),
            Err(ForecastIssue::NoModel) => Err(AppError::ForecastUnavailable),
            Err(ForecastIssue::PredictError(msg)) => Err(AppError::ExternalService(msg)),
        }
    }

    /// Predicted usage per ingredient; empty when the predictor is unavailable
    pub async fn usage_for_day(&self, date: NaiveDate) -> HashMap<String, f64> {
        match self.predictor.predict_usage(date).await {
            Ok(usage) => usage
                .into_iter()
                .map(|(name, quantity)| {
                    let quantity = if quantity.is_finite() { quantity.max(0.0) } else { 0.0 };
                    (name, quantity)
                })
                .collect(),
            Err(issue) => {
                tracing::warn!(%date, issue = %issue, "ingredient usage prediction unavailable");
                HashMap::new()
            }
        }
    }
}
