//! Order Context - 订单限界上下文
//!
//! 职责:
//! - 下单请求校验
//! - 订单行金额计算（下单时快照）
//! - 订单总额汇总

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::{sum_line_totals, Order, OrderDraft, RequestedLine};
pub use entities::OrderLine;
pub use errors::OrderError;
pub use value_objects::Quantity;
