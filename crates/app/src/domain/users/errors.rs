//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::PasswordError;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("email already registered")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("user not found")]
    NotFound,

    #[error("password processing error")]
    Password(#[from] PasswordError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
