use actix_web::HttpResponse;

use crate::services::ServiceError;

pub mod products;

/// Maps a service error to its transport status with a plain-text body.
///
/// The body is the error's display text; storage detail is logged here and
/// never sent to the client.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match &err {
        ServiceError::InvalidRequest(_) => {
            log::error!("Invalid product request: {err}");
            HttpResponse::BadRequest().body(err.to_string())
        }
        ServiceError::InvalidBarcode(_) => {
            log::error!("Invalid barcode: {err}");
            HttpResponse::BadRequest().body(err.to_string())
        }
        ServiceError::BarcodeConflict(_) => {
            log::error!("Barcode already exists: {err}");
            HttpResponse::BadRequest().body(err.to_string())
        }
        ServiceError::NotFound(_) => {
            log::error!("Product not found: {err}");
            HttpResponse::NotFound().body(err.to_string())
        }
        ServiceError::Database(source) => {
            log::error!("Database access error: {source}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}
