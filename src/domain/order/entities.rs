//! Order Context - Entities

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{OrderError, Quantity};
use crate::domain::product::Price;

/// 订单行
///
/// 不变量:
/// - total = 下单时单价 × 数量，之后商品调价不影响
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    id: Uuid,
    product_id: Uuid,
    quantity: Quantity,
    unit_price: Price,
    total: Decimal,
}

impl OrderLine {
    pub fn new(product_id: Uuid, quantity: Quantity, unit_price: Price) -> Result<Self, OrderError> {
        let total = unit_price
            .amount()
            .checked_mul(quantity.as_decimal())
            .ok_or(OrderError::TotalTooLarge)?;

        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            unit_price,
            total,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}
