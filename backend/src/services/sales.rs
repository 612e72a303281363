//! Sales service: daily aggregates over individual order lines

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use shared::{round2, DailyDetail, DaySnapshot, SalesRecord, TopItem};

use crate::error::{AppError, AppResult};

/// Sales service for reading aggregated order data
#[derive(Clone)]
pub struct SalesService {
    db: PgPool,
}

/// Row for the daily aggregate query
#[derive(Debug, FromRow)]
struct DailySalesRow {
    order_date: NaiveDate,
    total_sales: Decimal,
    total_orders: i64,
    avg_line: Decimal,
}

/// Row for the best sellers query
#[derive(Debug, FromRow)]
struct TopItemRow {
    name: String,
    quantity: i64,
    revenue: Decimal,
}

/// Totals for a single day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTotals {
    pub total_sales: f64,
    pub total_orders: u64,
    /// Mean order line value
    pub avg_line: f64,
}

impl DayTotals {
    /// Snapshot using the mean order line as the average check
    pub fn line_average_snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            today_sales: round2(self.total_sales),
            total_orders: self.total_orders,
            avg_check: round2(self.avg_line),
        }
    }

    /// Snapshot using sales per order as the average check
    pub fn blended_snapshot(&self) -> DaySnapshot {
        let avg_check = if self.total_orders > 0 {
            round2(self.total_sales / self.total_orders as f64)
        } else {
            0.0
        };
        DaySnapshot {
            today_sales: round2(self.total_sales),
            total_orders: self.total_orders,
            avg_check,
        }
    }
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

impl From<DailySalesRow> for SalesRecord {
    fn from(row: DailySalesRow) -> Self {
        SalesRecord::new(
            row.order_date,
            round2(to_f64(row.total_sales)),
            to_count(row.total_orders),
            round2(to_f64(row.avg_line)),
        )
    }
}

impl SalesService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Daily sales records, oldest first
    pub async fn daily_sales(&self) -> AppResult<Vec<SalesRecord>> {
        let rows = sqlx::query_as::<_, DailySalesRow>(
            r#"
            SELECT order_date,
                   COALESCE(SUM(total_price), 0) AS total_sales,
                   COUNT(DISTINCT order_id) AS total_orders,
                   COALESCE(AVG(total_price), 0) AS avg_line
            FROM pizza_sales
            GROUP BY order_date
            ORDER BY order_date
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(SalesRecord::from).collect())
    }

    /// Totals for one day; zero when nothing was sold
    pub async fn day_totals(&self, date: NaiveDate) -> AppResult<DayTotals> {
        let (total_sales, total_orders, avg_line): (Decimal, i64, Decimal) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_price), 0),
                   COUNT(DISTINCT order_id),
                   COALESCE(AVG(total_price), 0)
            FROM pizza_sales
            WHERE order_date = $1
            "#,
        )
        .bind(date)
        .fetch_one(&self.db)
        .await?;

        Ok(DayTotals {
            total_sales: to_f64(total_sales),
            total_orders: to_count(total_orders),
            avg_line: to_f64(avg_line),
        })
    }

    /// Best sellers and totals for one day
    pub async fn daily_detail(&self, date: NaiveDate, top_limit: u32) -> AppResult<DailyDetail> {
        let has_sales = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM pizza_sales WHERE order_date = $1)",
        )
        .bind(date)
        .fetch_one(&self.db)
        .await?;

        if !has_sales {
            return Err(AppError::NotFound("Sales data for this date".to_string()));
        }

        let top_rows = sqlx::query_as::<_, TopItemRow>(
            r#"
            SELECT pizza_name AS name,
                   COALESCE(SUM(quantity), 0)::BIGINT AS quantity,
                   COALESCE(SUM(total_price), 0) AS revenue
            FROM pizza_sales
            WHERE order_date = $1
            GROUP BY pizza_name
            ORDER BY quantity DESC, pizza_name
            LIMIT $2
            "#,
        )
        .bind(date)
        .bind(i64::from(top_limit))
        .fetch_all(&self.db)
        .await?;

        let totals = self.day_totals(date).await?;

        Ok(DailyDetail {
            top_items: top_rows
                .into_iter()
                .map(|row| TopItem {
                    name: row.name,
                    quantity: to_count(row.quantity),
                    revenue: round2(to_f64(row.revenue)),
                })
                .collect(),
            avg_check: round2(totals.avg_line),
            total_sales: round2(totals.total_sales),
            total_orders: totals.total_orders,
        })
    }
}
