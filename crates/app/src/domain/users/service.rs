//! Users service.

use tracing::info;

use crate::{
    auth::hash_password,
    database::Db,
    domain::users::{
        errors::UsersServiceError,
        models::{NewAccount, NewUser, User, UserUuid, normalize_email},
        repository::PgUsersRepository,
    },
};

/// Account management shared by registration and the admin CLI.
#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }

    /// Create an account with a freshly hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`UsersServiceError::MissingRequiredData`] when a field is blank,
    /// [`UsersServiceError::AlreadyExists`] when the email is taken, or a storage error.
    pub async fn create_user(&self, account: NewAccount) -> Result<User, UsersServiceError> {
        let NewAccount {
            name,
            email,
            password,
            is_admin,
        } = account;

        let name = name.trim().to_string();
        let email = normalize_email(&email);

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let password_hash = hash_password(&password)?;

        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .create_user(
                &mut tx,
                &NewUser {
                    uuid: UserUuid::new(),
                    name,
                    email,
                    password_hash,
                    is_admin,
                },
            )
            .await?;

        tx.commit().await?;

        info!(user = %user.uuid, is_admin, "user created");

        Ok(user)
    }

    /// Grant or revoke admin privileges for the account with `email`.
    ///
    /// # Errors
    ///
    /// Returns [`UsersServiceError::NotFound`] when no such account exists.
    pub async fn set_admin(&self, email: &str, is_admin: bool) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .set_admin(&mut tx, &normalize_email(email), is_admin)
            .await?
            .ok_or(UsersServiceError::NotFound)?;

        tx.commit().await?;

        info!(user = %user.uuid, is_admin, "admin flag changed");

        Ok(user)
    }
}
