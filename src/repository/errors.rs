use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A database uniqueness constraint rejected the write.
    #[error("already exists: {0}")]
    UniqueViolation(String),
    /// A row failed domain validation while being loaded or stored.
    #[error("validation error: {0}")]
    Validation(String),
    /// Connection pool exhaustion or connectivity failure.
    #[error(transparent)]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Any other database error.
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
