//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod customer_handlers;
mod order_handlers;
mod product_handlers;

pub use customer_handlers::*;
pub use order_handlers::*;
pub use product_handlers::*;
