//! Order Context - Value Objects

use rust_decimal::Decimal;

use super::OrderError;

/// 订购数量（> 0）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i32) -> Result<Self, OrderError> {
        if value <= 0 {
            return Err(OrderError::NonPositiveQuantity);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}
