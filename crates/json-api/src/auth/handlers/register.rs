//! Register Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::auth::Registration;

use crate::{
    auth::{MISSING_FIELDS, handlers::required, into_status_error},
    extensions::*,
    state::State,
};

/// Register Request
///
/// Admin rights are never granted here; an `isAdmin` field is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = StatusError;

    fn try_from(request: RegisterRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(password)) = (
            required(request.name),
            required(request.email),
            required(request.password),
        ) else {
            return Err(StatusError::bad_request().brief(MISSING_FIELDS));
        };

        Ok(Registration {
            name,
            email,
            password,
        })
    }
}

/// Registered Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisteredResponse {
    pub message: String,
}

/// Register Handler
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields or email already registered"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegisteredResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .auth
        .register(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    info!(user = %user.uuid, "user registered");

    res.status_code(StatusCode::CREATED);

    Ok(Json(RegisteredResponse {
        message: "User created successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::auth::{AuthServiceError, MockAuthService};

    use crate::test_helpers::{TEST_USER, auth_service, make_user};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_service(auth, Router::with_path("auth/register").post(handler))
    }

    #[tokio::test]
    async fn test_register_success_returns_201() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register()
            .once()
            .withf(|registration| {
                *registration
                    == Registration {
                        name: "Ada".to_string(),
                        email: "ada@example.com".to_string(),
                        password: "hunter22".to_string(),
                    }
            })
            .return_once(|_| Ok(make_user(TEST_USER)));

        let mut res = TestClient::post("http://example.com/auth/register")
            .json(&json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "hunter22",
                "isAdmin": true
            }))
            .send(&make_service(auth))
            .await;

        let body: RegisteredResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.message, "User created successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_register_missing_field_returns_400() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register().never();

        let res = TestClient::post("http://example.com/auth/register")
            .json(&json!({ "name": "Ada", "email": "ada@example.com" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_blank_field_returns_400() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register().never();

        let res = TestClient::post("http://example.com/auth/register")
            .json(&json!({ "name": " ", "email": "ada@example.com", "password": "x" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_duplicate_email_returns_400() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register()
            .once()
            .return_once(|_| Err(AuthServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/auth/register")
            .json(&json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "hunter22"
            }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
