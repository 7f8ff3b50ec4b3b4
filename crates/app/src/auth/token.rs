//! Session token issuing and verification.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::Error as JwtError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::models::UserUuid;

/// Default token lifetime.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(24);

/// Signed token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User the token was issued to.
    pub sub: Uuid,

    /// Issued at, in seconds since the Unix epoch.
    pub iat: i64,

    /// Expires at, in seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token")]
    Sign(#[source] JwtError),

    #[error("token rejected")]
    Rejected(#[source] JwtError),
}

/// Issues and verifies HS256 bearer tokens with a server-side secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: SignedDuration,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: &[u8], ttl: SignedDuration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);

        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    /// Issue a token for `user` valid from now until now + TTL.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, user: UserUuid) -> Result<String, TokenError> {
        self.issue_at(user, Timestamp::now())
    }

    /// Issue a token for `user` as if it were issued at `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue_at(&self, user: UserUuid, issued_at: Timestamp) -> Result<String, TokenError> {
        let iat = issued_at.as_second();

        let claims = Claims {
            sub: user.into_uuid(),
            iat,
            exp: iat.saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Sign)
    }

    /// Verify a token's signature and expiry and return the user it names.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Rejected`] for malformed, tampered, or expired tokens.
    pub fn verify(&self, token: &str) -> Result<UserUuid, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| UserUuid::from_uuid(data.claims.sub))
            .map_err(TokenError::Rejected)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("keys", &"**redacted**")
            .field("ttl", &self.ttl)
            .finish()
    }
}
