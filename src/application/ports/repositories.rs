//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）
//!
//! 只读查询（find_* / *_in_use）与写操作（insert / update / delete / create）分开，
//! 写操作在目标不存在时返回 `RepositoryError::NotFound`。

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Entity still referenced: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Customer Repository
// ============================================================================

/// 客户实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

/// Customer Repository Port
#[async_trait]
pub trait CustomerRepositoryPort: Send + Sync {
    /// 获取所有客户（按插入顺序）
    async fn find_all(&self) -> Result<Vec<CustomerRecord>, RepositoryError>;

    /// 根据 ID 查找客户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerRecord>, RepositoryError>;

    /// 邮箱是否已被占用（可排除某个客户自身）
    async fn email_in_use(
        &self,
        email: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, RepositoryError>;

    /// 新增客户
    async fn insert(&self, customer: &CustomerRecord) -> Result<(), RepositoryError>;

    /// 覆盖更新客户
    async fn update(&self, customer: &CustomerRecord) -> Result<(), RepositoryError>;

    /// 删除客户
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

// ============================================================================
// Product Repository
// ============================================================================

/// 商品实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub price: Decimal,
}

/// Product Repository Port
#[async_trait]
pub trait ProductRepositoryPort: Send + Sync {
    /// 获取所有商品（按插入顺序）
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductRecord>, RepositoryError>;

    /// 批量查找商品，不存在的 ID 直接缺席于结果
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProductRecord>, RepositoryError>;

    /// slug 是否已被占用（可排除某个商品自身）
    async fn slug_in_use(&self, slug: &str, exclude_id: Option<Uuid>)
        -> Result<bool, RepositoryError>;

    /// 新增商品
    async fn insert(&self, product: &ProductRecord) -> Result<(), RepositoryError>;

    /// 覆盖更新商品
    async fn update(&self, product: &ProductRecord) -> Result<(), RepositoryError>;

    /// 删除商品
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

// ============================================================================
// Order Repository
// ============================================================================

/// 订单行实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total: Decimal,
}

/// 订单实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lines: Vec<OrderLineRecord>,
}

/// 订单行详情（附带商品标题和当前单价）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineDetailsRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// 订单详情（附带客户姓名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lines: Vec<OrderLineDetailsRecord>,
}

/// Order Repository Port
#[async_trait]
pub trait OrderRepositoryPort: Send + Sync {
    /// 在一个事务中写入订单及全部订单行
    async fn create(&self, order: &OrderRecord) -> Result<(), RepositoryError>;

    /// 查询订单详情
    async fn find_details(&self, id: Uuid) -> Result<Option<OrderDetailsRecord>, RepositoryError>;
}
