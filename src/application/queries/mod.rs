//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod customer_queries;
mod order_queries;
mod product_queries;

pub mod handlers;

pub use customer_queries::*;
pub use order_queries::*;
pub use product_queries::*;
