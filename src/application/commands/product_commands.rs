//! Product Commands

use rust_decimal::Decimal;
use uuid::Uuid;

/// 创建商品命令
#[derive(Debug, Clone, Default)]
pub struct CreateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub price: Option<Decimal>,
}

/// 更新商品命令
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub product_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub price: Option<Decimal>,
}

/// 删除商品命令
#[derive(Debug, Clone)]
pub struct DeleteProduct {
    pub product_id: Uuid,
}
