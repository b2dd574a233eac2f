//! Product Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Price must be greater than zero")]
    NonPositivePrice,
}
