//! SQLite Product Repository

use std::str::FromStr;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::{classify_write_error, DbPool};
use crate::application::ports::{ProductRecord, ProductRepositoryPort, RepositoryError};

const SLUG_IN_USE: &str = "Slug already in use";
const PRODUCT_IN_ORDERS: &str = "Product is referenced by existing orders";

/// SQLite Product Repository
pub struct SqliteProductRepository {
    pool: DbPool,
}

impl SqliteProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: String,
    title: String,
    description: String,
    slug: String,
    price: String,
}

impl TryFrom<ProductRow> for ProductRecord {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(ProductRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            title: row.title,
            description: row.description,
            slug: row.slug,
            price: Decimal::from_str(&row.price)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl ProductRepositoryPort for SqliteProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, title, description, slug, price FROM products ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ProductRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductRecord>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, title, description, slug, price FROM products WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ProductRecord::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProductRecord>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // 构建 IN 子句的占位符
        let placeholders: Vec<&str> = ids.iter().map(|_| "?").collect();
        let query = format!(
            "SELECT id, title, description, slug, price FROM products WHERE id IN ({})",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, ProductRow>(&query);
        for id in ids {
            sql_query = sql_query.bind(id.to_string());
        }

        let rows: Vec<ProductRow> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ProductRecord::try_from).collect()
    }

    async fn slug_in_use(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        let exclude = exclude_id.map(|id| id.to_string()).unwrap_or_default();

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE slug = ? AND id <> ?)",
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, product: &ProductRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, title, description, slug, price)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.slug)
        .bind(product.price.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, SLUG_IN_USE, PRODUCT_IN_ORDERS))?;

        Ok(())
    }

    async fn update(&self, product: &ProductRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET title = ?, description = ?, slug = ?, price = ?
            WHERE id = ?
            "#,
        )
        .bind(&product.title)
        .bind(&product.description)
        .bind(&product.slug)
        .bind(product.price.to_string())
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, SLUG_IN_USE, PRODUCT_IN_ORDERS))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| classify_write_error(e, SLUG_IN_USE, PRODUCT_IN_ORDERS))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }
}
