//! Auth service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{
    auth::{PasswordError, TokenError},
    domain::users::UsersServiceError,
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("email already registered")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,

    #[error("user not found")]
    NotFound,

    #[error("password processing error")]
    Password(#[from] PasswordError),

    #[error("token processing error")]
    Token(#[source] TokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Rejected(_) => Self::InvalidToken,
            TokenError::Sign(_) => Self::Token(error),
        }
    }
}

impl From<UsersServiceError> for AuthServiceError {
    fn from(error: UsersServiceError) -> Self {
        match error {
            UsersServiceError::AlreadyExists => Self::AlreadyExists,
            UsersServiceError::MissingRequiredData => Self::MissingRequiredData,
            UsersServiceError::NotFound => Self::NotFound,
            UsersServiceError::Password(error) => Self::Password(error),
            UsersServiceError::Sql(error) => Self::Sql(error),
        }
    }
}
