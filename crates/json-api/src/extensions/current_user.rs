//! Authenticated user carried through the depot.

use salvo::prelude::{Depot, StatusError};

use storefront_app::domain::users::models::User;

/// Access to the user resolved by the auth middleware.
pub(crate) trait CurrentUserExt {
    fn insert_current_user(&mut self, user: User);

    fn current_user_or_401(&self) -> Result<&User, StatusError>;
}

impl CurrentUserExt for Depot {
    fn insert_current_user(&mut self, user: User) {
        self.inject(user);
    }

    fn current_user_or_401(&self) -> Result<&User, StatusError> {
        self.obtain::<User>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Token is missing"))
    }
}
