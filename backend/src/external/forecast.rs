//! Forecasting service client
//!
//! The sales and ingredient-usage models live behind a separate HTTP service.
//! This client only knows how to ask it for a number per day.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::ForecastIssue;

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};
use crate::services::forecast::SalesPredictor;

/// Forecasting service client
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictionRequest {
    date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct SalesPredictionResponse {
    predicted_sales: f64,
}

#[derive(Debug, Deserialize)]
struct UsagePredictionResponse {
    #[serde(default)]
    usage: HashMap<String, f64>,
}

impl ForecastClient {
    /// Create a new ForecastClient from configuration
    pub fn new(config: &ForecastConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("forecast client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .as_ref()
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        date: NaiveDate,
    ) -> Result<T, ForecastIssue> {
        let base_url = self.base_url.as_ref().ok_or(ForecastIssue::NoModel)?;
        let url = format!("{}/{}", base_url, path);

        let response = self
            .client
            .post(&url)
            .json(&PredictionRequest { date })
            .send()
            .await
            .map_err(|e| ForecastIssue::PredictError(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ForecastIssue::PredictError(format!("{} - {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| ForecastIssue::PredictError(format!("invalid response: {}", e)))
    }
}

impl SalesPredictor for ForecastClient {
    async fn predict_sales(&self, date: NaiveDate) -> Result<f64, ForecastIssue> {
        let data: SalesPredictionResponse = self.post("predict", date).await?;
        if !data.predicted_sales.is_finite() {
            return Err(ForecastIssue::PredictError("non-finite prediction".to_string()));
        }
        Ok(data.predicted_sales)
    }

    async fn predict_usage(&self, date: NaiveDate) -> Result<HashMap<String, f64>, ForecastIssue> {
        let data: UsagePredictionResponse = self.post("usage", date).await?;
        Ok(data.usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_client_has_no_model() {
        let client = ForecastClient::new(&ForecastConfig {
            base_url: None,
            timeout_secs: 1,
        })
        .unwrap();
        assert!(!client.is_configured());

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(client.predict_sales(date).await, Err(ForecastIssue::NoModel));
        assert_eq!(client.predict_usage(date).await, Err(ForecastIssue::NoModel));
    }

    #[test]
    fn test_blank_base_url_counts_as_unconfigured() {
        let client = ForecastClient::new(&ForecastConfig {
            base_url: Some("   ".to_string()),
            timeout_secs: 1,
        })
        .unwrap();
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_whitespace_base_url_has_no_model() {
        let client = ForecastClient::new(&ForecastConfig {
            base_url: Some(" \t ".to_string()),
            timeout_secs: 1,
        })
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(client.predict_sales(date).await, Err(ForecastIssue::NoModel));
    }

    #[test]
    fn test_base_url_is_trimmed() {
        let client = ForecastClient::new(&ForecastConfig {
            base_url: Some("  http://forecast:9000/ ".to_string()),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(client.base_url.as_deref(), Some("http://forecast:9000"));
    }
}
