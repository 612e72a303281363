//! Configuration management for the Sales Dashboard API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DASH_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Forecasting service configuration
    pub forecast: ForecastConfig,

    /// Dashboard computation settings
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ForecastConfig {
    /// Base URL of the forecasting service; forecasts are unavailable without it
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct DashboardConfig {
    /// Most recent days averaged on the sales page
    #[validate(range(min = 1, max = 365))]
    pub rolling_window_days: u32,

    /// Days covered by the weekly forecast
    #[validate(range(min = 1, max = 31))]
    pub forecast_horizon_days: u32,

    /// Best sellers listed in a daily detail
    #[validate(range(min = 1, max = 100))]
    pub top_items_limit: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("DASH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("forecast.timeout_secs", 10)?
            .set_default("dashboard.rolling_window_days", 7)?
            .set_default("dashboard.forecast_horizon_days", 7)?
            .set_default("dashboard.top_items_limit", 5)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DASH_ prefix)
            .add_source(
                Environment::with_prefix("DASH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config
            .dashboard
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid dashboard settings: {}", e)))?;

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rolling_window_days: 7,
            forecast_horizon_days: 7,
            top_items_limit: 5,
        }
    }
}
