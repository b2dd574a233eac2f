//! Product Context - Value Objects

use rust_decimal::Decimal;

use super::ProductError;

/// 商品单价
///
/// 不变量:
/// - 严格大于 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Result<Self, ProductError> {
        if amount <= Decimal::ZERO {
            return Err(ProductError::NonPositivePrice);
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
