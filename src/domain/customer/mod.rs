//! Customer Context - 客户限界上下文
//!
//! 职责:
//! - 客户资料字段校验（必填、邮箱格式、出生日期）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::CustomerProfile;
pub use errors::CustomerError;
pub use value_objects::{BirthDate, Email};
