//! Customer Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("BirthDate cannot be in the future")]
    BirthDateInFuture,

    #[error("Email is invalid")]
    InvalidEmail,
}
