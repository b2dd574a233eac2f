//! Order Queries

use uuid::Uuid;

/// 获取订单详情查询
#[derive(Debug, Clone)]
pub struct GetOrder {
    pub order_id: Uuid,
}
