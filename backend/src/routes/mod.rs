//! Route definitions for the Sales Dashboard API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/dashboard", dashboard_routes())
        .nest("/salesdata", sales_routes())
        .nest("/inventory", inventory_routes())
        .route("/predict", post(handlers::predict_sales))
}

/// Overview page routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::get_dashboard_stats))
        .route("/sales", get(handlers::get_sales_for_date))
}

/// Sales data routes
fn sales_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales))
        .route("/summary", get(handlers::get_sales_summary))
        .route("/:date", get(handlers::get_daily_detail))
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_inventory))
        .route("/status", get(handlers::get_inventory_status))
}
