//! Inventory items and stock status classification

use serde::{Deserialize, Serialize};

use crate::validation::{identifier, number_or_zero};

/// Stock position of one ingredient for the active usage window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(deserialize_with = "identifier")]
    pub id: String,
    pub ingredient: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub current_stock: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub predicted_usage: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub reorder_level: f64,
    /// Cost per unit
    #[serde(default, deserialize_with = "number_or_zero")]
    pub cost: f64,
}

impl InventoryItem {
    /// Stock left after the predicted usage; negative means a shortfall
    pub fn remaining(&self) -> f64 {
        self.current_stock - self.predicted_usage
    }

    pub fn assess(&self) -> StockAssessment {
        classify_stock(self.current_stock, self.predicted_usage, self.reorder_level)
    }
}

/// Stock status tiers, most severe first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    /// Predicted usage exceeds stock on hand
    Critical,
    /// Stock on hand is at or below the reorder level
    LowStock,
    /// Stock left after usage is at or below half the reorder level
    Warning,
    Good,
}

impl StockStatus {
    pub fn needs_reorder(&self) -> bool {
        *self != StockStatus::Good
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Critical => write!(f, "Critical"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::Warning => write!(f, "Warning"),
            StockStatus::Good => write!(f, "Good"),
        }
    }
}

/// Classified status together with the signed remaining stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StockAssessment {
    pub status: StockStatus,
    pub remaining: f64,
}

/// Classify a stock position. The first matching tier wins.
///
/// A unit already at or below its reorder level is never better than
/// `LowStock`, whatever its projected remainder looks like.
pub fn classify_stock(current_stock: f64, predicted_usage: f64, reorder_level: f64) -> StockAssessment {
    let remaining = current_stock - predicted_usage;
    let status = if remaining < 0.0 {
        StockStatus::Critical
    } else if current_stock <= reorder_level {
        StockStatus::LowStock
    } else if remaining <= reorder_level * 0.5 {
        StockStatus::Warning
    } else {
        StockStatus::Good
    };
    StockAssessment { status, remaining }
}

/// An inventory row ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub status: StockStatus,
    pub remaining: f64,
}

impl From<InventoryItem> for ClassifiedItem {
    fn from(item: InventoryItem) -> Self {
        let StockAssessment { status, remaining } = item.assess();
        Self {
            item,
            status,
            remaining,
        }
    }
}
