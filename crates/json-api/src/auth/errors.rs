//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::auth::AuthServiceError;

pub(crate) const MISSING_FIELDS: &str = "Missing required fields";

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::MissingRequiredData => StatusError::bad_request().brief(MISSING_FIELDS),
        AuthServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Email already registered")
        }
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid credentials")
        }
        AuthServiceError::InvalidToken | AuthServiceError::NotFound => {
            StatusError::unauthorized().brief("Token is invalid")
        }
        AuthServiceError::Password(source) => {
            error!("password hashing failed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("failed to sign session token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
