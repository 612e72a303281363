//! Caller-held stock overrides applied before classification

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClassifiedItem, InventoryItem};

use super::aggregate::reorder_cost;

/// Edited stock quantities keyed by item id. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StockOverrides(HashMap<String, f64>);

impl StockOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<String>, current_stock: f64) {
        self.0.insert(id.into(), current_stock);
    }

    pub fn clear(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies of `items` with overridden stock; unknown ids are ignored
    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        items
            .iter()
            .map(|item| match self.get(&item.id) {
                Some(current_stock) if current_stock.is_finite() => InventoryItem {
                    current_stock,
                    ..item.clone()
                },
                _ => item.clone(),
            })
            .collect()
    }
}

impl FromIterator<(String, f64)> for StockOverrides {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Apply overrides, then classify each row, keeping input order
pub fn classify_inventory(items: &[InventoryItem], overrides: &StockOverrides) -> Vec<ClassifiedItem> {
    overrides
        .apply(items)
        .into_iter()
        .map(ClassifiedItem::from)
        .collect()
}

/// Classified rows plus the reorder estimate for the inventory page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryReport {
    pub rows: Vec<ClassifiedItem>,
    pub reorder_cost: f64,
}

pub fn inventory_report(items: &[InventoryItem], overrides: &StockOverrides) -> InventoryReport {
    let effective = overrides.apply(items);
    InventoryReport {
        reorder_cost: reorder_cost(&effective),
        rows: effective.into_iter().map(ClassifiedItem::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StockStatus;

    fn item(id: &str, current: f64) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            ingredient: format!("ingredient-{}", id),
            unit: "lbs".to_string(),
            current_stock: current,
            predicted_usage: 4.0,
            reorder_level: 10.0,
            cost: 2.0,
        }
    }

    #[test]
    fn test_apply_replaces_matching_ids_only() {
        let items = vec![item("a", 50.0), item("b", 50.0)];
        let mut overrides = StockOverrides::new();
        overrides.set("b", 3.0);
        overrides.set("zzz", 1.0);

        let applied = overrides.apply(&items);
        assert_eq!(applied[0].current_stock, 50.0);
        assert_eq!(applied[1].current_stock, 3.0);
        // input untouched
        assert_eq!(items[1].current_stock, 50.0);
    }

    #[test]
    fn test_classification_sees_overrides() {
        let items = vec![item("a", 50.0)];
        let overrides: StockOverrides = vec![("a".to_string(), 2.0)].into_iter().collect();

        let rows = classify_inventory(&items, &overrides);
        assert_eq!(rows[0].status, StockStatus::Critical);
        assert_eq!(rows[0].remaining, -2.0);

        let rows = classify_inventory(&items, &StockOverrides::new());
        assert_eq!(rows[0].status, StockStatus::Good);
    }

    #[test]
    fn test_report_uses_overridden_stock() {
        let items = vec![item("a", 50.0), item("b", 50.0)];
        let overrides: StockOverrides = vec![("b".to_string(), 6.0)].into_iter().collect();

        let report = inventory_report(&items, &overrides);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].status, StockStatus::LowStock);
        // b: 2 * 10 - 6 = 14 units at 2.0
        assert_eq!(report.reorder_cost, 28.0);
    }

    #[test]
    fn test_clear_and_deserialize() {
        let mut overrides: StockOverrides = serde_json::from_str(r#"{"7": 12.5}"#).unwrap();
        assert_eq!(overrides.get("7"), Some(12.5));
        overrides.clear("7");
        assert!(overrides.is_empty());
    }
}
