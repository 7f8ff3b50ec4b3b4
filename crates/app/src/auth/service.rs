//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{
        AuthServiceError, Credentials, IssuedToken, Registration, TokenService, verify_password,
    },
    database::Db,
    domain::users::{
        PgUsersService,
        models::{NewAccount, User, normalize_email},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    users: PgUsersService,
    repository: PgUsersRepository,
    tokens: TokenService,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, tokens: TokenService) -> Self {
        Self {
            users: PgUsersService::new(db.clone()),
            db,
            repository: PgUsersRepository::new(),
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn register(&self, registration: Registration) -> Result<User, AuthServiceError> {
        let Registration {
            name,
            email,
            password,
        } = registration;

        let user = self
            .users
            .create_user(NewAccount {
                name,
                email,
                password,
                is_admin: false,
            })
            .await?;

        Ok(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self
            .repository
            .find_credentials(&mut tx, &normalize_email(&credentials.email))
            .await?;

        tx.commit().await?;

        let Some(found) = found else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(&credentials.password, &found.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(found.user.uuid)?;

        Ok(IssuedToken {
            token,
            user: found.user,
        })
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<User, AuthServiceError> {
        let user_uuid = self.tokens.verify(bearer_token)?;

        let mut tx = self.db.begin().await?;

        let user = self.repository.find_user(&mut tx, user_uuid).await?;

        tx.commit().await?;

        // A valid signature for a deleted account is still an invalid token.
        user.ok_or(AuthServiceError::InvalidToken)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a non-admin account.
    async fn register(&self, registration: Registration) -> Result<User, AuthServiceError>;

    /// Exchange email and password for a signed session token.
    async fn login(&self, credentials: Credentials) -> Result<IssuedToken, AuthServiceError>;

    /// Resolve a bearer token to the user it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<User, AuthServiceError>;
}
