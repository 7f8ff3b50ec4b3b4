//! Upload Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::uploads::UploadsServiceError;

pub(crate) fn into_status_error(error: UploadsServiceError) -> StatusError {
    match error {
        UploadsServiceError::MissingFile => StatusError::bad_request().brief("No file provided"),
        UploadsServiceError::DisallowedExtension => {
            StatusError::bad_request().brief("File type not allowed")
        }
        UploadsServiceError::InvalidFileName => {
            StatusError::bad_request().brief("Invalid file name")
        }
        UploadsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A file with this name already exists")
        }
        UploadsServiceError::Io(source) => {
            error!("failed to store upload: {source}");

            StatusError::internal_server_error()
        }
    }
}
