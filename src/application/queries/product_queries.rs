//! Product Queries

use uuid::Uuid;

/// 获取商品详情查询
#[derive(Debug, Clone)]
pub struct GetProduct {
    pub product_id: Uuid,
}

/// 列出所有商品查询
#[derive(Debug, Clone)]
pub struct ListProducts;
