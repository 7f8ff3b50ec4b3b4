//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{auth::Credentials, domain::users::models::User};

use crate::{
    auth::{MISSING_FIELDS, handlers::required, into_status_error},
    extensions::*,
    state::State,
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = StatusError;

    fn try_from(request: LoginRequest) -> Result<Self, Self::Error> {
        let (Some(email), Some(password)) = (required(request.email), required(request.password))
        else {
            return Err(StatusError::bad_request().brief(MISSING_FIELDS));
        };

        Ok(Credentials { email, password })
    }
}

/// Public view of an account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.uuid.into_uuid(),
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user: UserResponse,
}

/// Login Handler
#[endpoint(
    tags("auth"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Session token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let issued = state
        .app
        .auth
        .login(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    Ok(Json(LoginResponse {
        token: issued.token,
        user: issued.user.into(),
    }))
}
