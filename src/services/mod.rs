use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;

/// Result type returned by every service operation.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain errors returned by the service layer.
///
/// Each variant maps to exactly one transport status at the boundary; the
/// display text is what the client sees. Storage detail stays behind the
/// fixed `Database` message and only reaches the log.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed create/update body. Maps to 400.
    #[error("{0}")]
    InvalidRequest(String),
    /// Malformed barcode path parameter. Maps to 400.
    #[error("{0}")]
    InvalidBarcode(String),
    /// Create with a barcode already in use. Maps to 400.
    #[error("Product with barcode {0} already exists")]
    BarcodeConflict(String),
    /// No product for the given barcode. Maps to 404.
    #[error("Product not found with barcode: {0}")]
    NotFound(String),
    /// Any underlying persistence failure. Maps to 500.
    #[error("Error accessing the database")]
    Database(#[from] RepositoryError),
}
