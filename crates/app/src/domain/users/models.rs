//! User Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// User Model
///
/// Never carries the password hash; see [`UserCredentials`].
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// Account details supplied by whoever is creating the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// New User Model
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// A user together with the stored password hash, used only during login.
#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Canonical form of an email address for storage and lookup.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }
}
