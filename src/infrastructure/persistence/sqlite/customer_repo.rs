//! SQLite Customer Repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use super::{classify_write_error, DbPool};
use crate::application::ports::{CustomerRecord, CustomerRepositoryPort, RepositoryError};

const EMAIL_IN_USE: &str = "Email already in use";
const CUSTOMER_HAS_ORDERS: &str = "Customer has existing orders";

/// SQLite Customer Repository
pub struct SqliteCustomerRepository {
    pool: DbPool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    birth_date: String,
}

impl TryFrom<CustomerRow> for CustomerRecord {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(CustomerRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            email: row.email,
            phone: row.phone,
            birth_date: NaiveDate::parse_from_str(&row.birth_date, "%Y-%m-%d")
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl CustomerRepositoryPort for SqliteCustomerRepository {
    async fn find_all(&self) -> Result<Vec<CustomerRecord>, RepositoryError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            "SELECT id, name, email, phone, birth_date FROM customers ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CustomerRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerRecord>, RepositoryError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            "SELECT id, name, email, phone, birth_date FROM customers WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(CustomerRecord::try_from).transpose()
    }

    async fn email_in_use(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, RepositoryError> {
        // 排除 ID 为空串时条件恒成立
        let exclude = exclude_id.map(|id| id.to_string()).unwrap_or_default();

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email = ? AND id <> ?)",
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, customer: &CustomerRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, phone, birth_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer.id.to_string())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.birth_date.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, EMAIL_IN_USE, CUSTOMER_HAS_ORDERS))?;

        Ok(())
    }

    async fn update(&self, customer: &CustomerRecord) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, email = ?, phone = ?, birth_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.birth_date.to_string())
        .bind(customer.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| classify_write_error(e, EMAIL_IN_USE, CUSTOMER_HAS_ORDERS))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| classify_write_error(e, EMAIL_IN_USE, CUSTOMER_HAS_ORDERS))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_pool;

    fn customer(email: &str) -> CustomerRecord {
        CustomerRecord {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            email: email.to_string(),
            phone: "123456789".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_customer_crud() {
        let repo = SqliteCustomerRepository::new(test_pool().await);
        let mut record = customer("john@example.com");

        repo.insert(&record).await.unwrap();
        assert_eq!(repo.find_by_id(record.id).await.unwrap(), Some(record.clone()));

        record.name = "Jane Doe".to_string();
        repo.update(&record).await.unwrap();
        assert_eq!(repo.find_by_id(record.id).await.unwrap().unwrap().name, "Jane Doe");

        repo.delete(record.id).await.unwrap();
        assert!(repo.find_by_id(record.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(record.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = SqliteCustomerRepository::new(test_pool().await);
        let first = customer("a@example.com");
        let second = customer("b@example.com");
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_email_in_use_excludes_self() {
        let repo = SqliteCustomerRepository::new(test_pool().await);
        let record = customer("john@example.com");
        repo.insert(&record).await.unwrap();

        assert!(repo.email_in_use("john@example.com", None).await.unwrap());
        assert!(!repo.email_in_use("john@example.com", Some(record.id)).await.unwrap());
        assert!(repo.email_in_use("john@example.com", Some(Uuid::new_v4())).await.unwrap());
        assert!(!repo.email_in_use("other@example.com", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_unique_constraint_maps_to_duplicate() {
        let repo = SqliteCustomerRepository::new(test_pool().await);
        repo.insert(&customer("john@example.com")).await.unwrap();

        let err = repo.insert(&customer("john@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(msg) if msg == EMAIL_IN_USE));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = SqliteCustomerRepository::new(test_pool().await);
        let err = repo.update(&customer("john@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }
}
