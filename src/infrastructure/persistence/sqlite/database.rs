//! SQLite Database - 数据库连接和迁移

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    /// 内存数据库，只允许单连接（每个连接都是独立的库）
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// PRAGMA 通过连接选项设置，池中每个新连接都会执行。
/// 级联删除和引用保护依赖 `foreign_keys`。
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .foreign_keys(true)
        // 遇到锁时等待而不是立即失败
        .busy_timeout(BUSY_TIMEOUT)
        .synchronous(SqliteSynchronous::Normal);

    let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        // 内存库的连接一旦被回收，数据随之丢失
        options = options.idle_timeout(None).max_lifetime(None);
    } else {
        // WAL 允许并发读写
        connect_options = connect_options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool = options.connect_with(connect_options).await?;

    tracing::info!(
        max_connections = config.max_connections,
        busy_timeout_ms = BUSY_TIMEOUT.as_millis() as u64,
        "SQLite pool created"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 customers 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT NOT NULL,
            birth_date TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 products 表（price 以十进制字符串保存，避免浮点误差）
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            price TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 orders 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            id TEXT PRIMARY KEY,
            customer_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customers(id) ON DELETE RESTRICT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 order_lines 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS order_lines (
            id TEXT PRIMARY KEY,
            order_id TEXT NOT NULL,
            line_index INTEGER NOT NULL,
            product_id TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity > 0),
            total TEXT NOT NULL,
            FOREIGN KEY (order_id) REFERENCES orders(id) ON DELETE CASCADE,
            FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE RESTRICT,
            UNIQUE (order_id, line_index)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建索引
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_orders_customer_id
        ON orders(customer_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_order_lines_product_id
        ON order_lines(product_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 将写操作的 sqlx 错误归类
///
/// 唯一约束冲突 -> `Duplicate(duplicate)`，外键约束冲突 -> `ForeignKey(referenced)`
pub(crate) fn classify_write_error(
    err: sqlx::Error,
    duplicate: &str,
    referenced: &str,
) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::Duplicate(duplicate.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::ForeignKey(referenced.to_string());
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

/// 测试用：已迁移的内存数据库
#[cfg(test)]
pub async fn test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
