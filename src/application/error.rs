//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::{CustomerError, OrderError, ProductError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{0}")]
    NotFound(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 唯一性冲突或被引用
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误，例如 `Customer not found`
    pub fn not_found(resource_type: &'static str) -> Self {
        Self::NotFound(format!("{} not found", resource_type))
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Duplicate(msg) | RepositoryError::ForeignKey(msg) => Self::Conflict(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<CustomerError> for ApplicationError {
    fn from(err: CustomerError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<ProductError> for ApplicationError {
    fn from(err: ProductError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<OrderError> for ApplicationError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::UnknownProducts => Self::NotFound(err.to_string()),
            other => Self::validation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_classified() {
        let err: ApplicationError = RepositoryError::Duplicate("Email already in use".into()).into();
        assert!(matches!(err, ApplicationError::Conflict(msg) if msg == "Email already in use"));

        let err: ApplicationError = RepositoryError::NotFound("Customer not found".into()).into();
        assert!(matches!(err, ApplicationError::NotFound(_)));

        let err: ApplicationError = RepositoryError::DatabaseError("disk I/O".into()).into();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }

    #[test]
    fn test_unknown_products_is_not_found() {
        let err: ApplicationError = OrderError::UnknownProducts.into();
        assert!(matches!(err, ApplicationError::NotFound(msg) if msg == "One or more products not found"));

        let err: ApplicationError = OrderError::NoLines.into();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}
