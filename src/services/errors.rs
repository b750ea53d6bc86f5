use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Submitted data violated a business rule; the message names the
    /// constraint and is safe to show to the operator.
    #[error("{0}")]
    Form(String),
    /// The referenced parent category does not exist.
    #[error("parent category not found")]
    InvalidParent,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
