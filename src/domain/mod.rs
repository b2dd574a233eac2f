//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Customer Context: 客户资料
//! - Product Context: 商品信息
//! - Order Context: 下单与订单行定价

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{CustomerError, CustomerProfile};
pub use order::{Order, OrderDraft, OrderError, OrderLine};
pub use product::{Price, ProductError, ProductListing};

/// 必填文本字段：缺失、null 或全空白都视为未提供
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
