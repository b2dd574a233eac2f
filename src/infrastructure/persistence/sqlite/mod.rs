//! SQLite Persistence - SQLite 数据库持久化实现

mod customer_repo;
mod database;
mod order_repo;
mod product_repo;

pub use customer_repo::*;
pub use database::*;
pub use order_repo::*;
pub use product_repo::*;
