//! Order Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("CustomerId is required")]
    MissingCustomer,

    #[error("Order must have at least one line")]
    NoLines,

    #[error("ProductId is required")]
    MissingProduct,

    #[error("Quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("One or more products not found")]
    UnknownProducts,

    #[error("Order total is too large")]
    TotalTooLarge,
}
