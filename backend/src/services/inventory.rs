//! Inventory service: ingredient stock positions for a day

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use shared::{round2, InventoryItem};

use crate::error::AppResult;
use crate::services::sales::to_f64;

/// Inventory service for reading ingredient stock
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Row for the stock position query
#[derive(Debug, FromRow)]
struct StockRow {
    id: i64,
    name: String,
    unit: String,
    unit_cost: Decimal,
    reorder_level: f64,
    current_stock: f64,
}

impl StockRow {
    fn into_item(self, usage: &HashMap<String, f64>) -> InventoryItem {
        let predicted_usage = usage.get(&self.name).copied().unwrap_or(0.0);
        InventoryItem {
            id: self.id.to_string(),
            ingredient: self.name,
            unit: self.unit,
            current_stock: self.current_stock,
            predicted_usage: round2(predicted_usage),
            reorder_level: self.reorder_level,
            cost: to_f64(self.unit_cost),
        }
    }
}

impl InventoryService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Every ingredient with its latest stock snapshot on or before `date`,
    /// ordered by name. Ingredients without a snapshot have zero stock.
    pub async fn stock_positions(
        &self,
        date: NaiveDate,
        usage: &HashMap<String, f64>,
    ) -> AppResult<Vec<InventoryItem>> {
        let rows = sqlx::query_as::<_, StockRow>(
            r#"
            SELECT i.id, i.name, i.unit, i.unit_cost, i.reorder_level,
                   COALESCE((
                       SELECT l.current_stock
                       FROM inventory_levels l
                       WHERE l.ingredient_id = i.id AND l.date <= $1
                       ORDER BY l.date DESC
                       LIMIT 1
                   ), 0) AS current_stock
            FROM ingredients i
            ORDER BY i.name
            "#,
        )
        .bind(date)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(|row| row.into_item(usage)).collect())
    }
}
