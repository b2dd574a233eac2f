//! SQLite Order Repository

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::{classify_write_error, DbPool};
use crate::application::ports::{
    OrderDetailsRecord, OrderLineDetailsRecord, OrderRecord, OrderRepositoryPort, RepositoryError,
};

const ORDER_EXISTS: &str = "Order already exists";
const ORDER_REFERENCE_MISSING: &str = "Order references a missing customer or product";

/// SQLite Order Repository
pub struct SqliteOrderRepository {
    pool: DbPool,
}

impl SqliteOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OrderDetailsRow {
    id: String,
    customer_id: String,
    customer_name: String,
    created_at: String,
    updated_at: String,
}

#[derive(FromRow)]
struct OrderLineDetailsRow {
    id: String,
    product_id: String,
    product_title: String,
    quantity: i64,
    unit_price: String,
    total: String,
}

fn parse_uuid(value: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

fn parse_decimal(value: &str) -> Result<Decimal, RepositoryError> {
    Decimal::from_str(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
        .with_timezone(&Utc))
}

impl TryFrom<OrderLineDetailsRow> for OrderLineDetailsRecord {
    type Error = RepositoryError;

    fn try_from(row: OrderLineDetailsRow) -> Result<Self, Self::Error> {
        Ok(OrderLineDetailsRecord {
            id: parse_uuid(&row.id)?,
            product_id: parse_uuid(&row.product_id)?,
            product_title: row.product_title,
            quantity: i32::try_from(row.quantity)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            unit_price: parse_decimal(&row.unit_price)?,
            total: parse_decimal(&row.total)?,
        })
    }
}

#[async_trait]
impl OrderRepositoryPort for SqliteOrderRepository {
    async fn create(&self, order: &OrderRecord) -> Result<(), RepositoryError> {
        // 使用事务确保订单与订单行同时写入
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, customer_id, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(order.id.to_string())
        .bind(order.customer_id.to_string())
        .bind(order.created_at.to_rfc3339())
        .bind(order.updated_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_write_error(e, ORDER_EXISTS, ORDER_REFERENCE_MISSING))?;

        for (index, line) in order.lines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_lines (id, order_id, line_index, product_id, quantity, total)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(line.id.to_string())
            .bind(order.id.to_string())
            .bind(index as i64)
            .bind(line.product_id.to_string())
            .bind(line.quantity)
            .bind(line.total.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| classify_write_error(e, ORDER_EXISTS, ORDER_REFERENCE_MISSING))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_details(&self, id: Uuid) -> Result<Option<OrderDetailsRecord>, RepositoryError> {
        let row: Option<OrderDetailsRow> = sqlx::query_as(
            r#"
            SELECT o.id, o.customer_id, c.name AS customer_name, o.created_at, o.updated_at
            FROM orders o
            JOIN customers c ON c.id = o.customer_id
            WHERE o.id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let line_rows: Vec<OrderLineDetailsRow> = sqlx::query_as(
            r#"
            SELECT l.id, l.product_id, p.title AS product_title, l.quantity,
                   p.price AS unit_price, l.total
            FROM order_lines l
            JOIN products p ON p.id = l.product_id
            WHERE l.order_id = ?
            ORDER BY l.line_index
            "#,
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let lines = line_rows
            .into_iter()
            .map(OrderLineDetailsRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(OrderDetailsRecord {
            id: parse_uuid(&row.id)?,
            customer_id: parse_uuid(&row.customer_id)?,
            customer_name: row.customer_name,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
            lines,
        }))
    }
}
