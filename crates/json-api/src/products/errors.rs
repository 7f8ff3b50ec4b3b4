//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Name and price are required")
        }
        ProductsServiceError::InvalidData => StatusError::bad_request().brief("Invalid price"),
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("products storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
