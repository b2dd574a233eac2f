//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod customer_commands;
mod order_commands;
mod product_commands;

pub mod handlers;

pub use customer_commands::*;
pub use order_commands::*;
pub use product_commands::*;
