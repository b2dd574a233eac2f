//! Product Context - 商品限界上下文

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::ProductListing;
pub use errors::ProductError;
pub use value_objects::Price;
