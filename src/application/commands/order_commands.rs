//! Order Commands

use uuid::Uuid;

/// 下单命令中的一行
#[derive(Debug, Clone, Default)]
pub struct CreateOrderLine {
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

/// 下单命令
#[derive(Debug, Clone, Default)]
pub struct CreateOrder {
    pub customer_id: Option<Uuid>,
    pub lines: Option<Vec<CreateOrderLine>>,
}
