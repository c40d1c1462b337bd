use thiserror::Error;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors raised by the storage layer.
///
/// The service layer treats every variant as one opaque storage failure; the
/// distinction only matters for logs.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database query error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
    #[error("entity not found")]
    NotFound,
}
