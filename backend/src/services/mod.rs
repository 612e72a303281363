//! Business logic services for the Sales Dashboard

pub mod forecast;
pub mod inventory;
pub mod sales;

pub use forecast::{ForecastService, SalesPredictor};
pub use inventory::InventoryService;
pub use sales::SalesService;
