//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use storefront_app::auth::AuthServiceError;

use crate::{extensions::*, state::State};

/// Require a valid bearer token and attach its user to the depot.
#[salvo::handler]
pub(crate) async fn authenticated(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if !req.headers().contains_key(AUTHORIZATION) {
        res.render(StatusError::unauthorized().brief("Token is missing"));
        ctrl.skip_rest();

        return;
    }

    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Token is invalid"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let user = match state.app.auth.authenticate_bearer(token).await {
        Ok(user) => user,
        Err(AuthServiceError::InvalidToken | AuthServiceError::NotFound) => {
            res.render(StatusError::unauthorized().brief("Token is invalid"));
            ctrl.skip_rest();

            return;
        }
        Err(source) => {
            error!("failed to authenticate bearer token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_current_user(user);

    ctrl.call_next(req, depot, res).await;
}

/// Require the authenticated user to be an admin. Must run after [`authenticated`].
#[salvo::handler]
pub(crate) async fn admin_only(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let is_admin = match depot.current_user_or_401() {
        Ok(user) => user.is_admin,
        Err(status) => {
            res.render(status);
            ctrl.skip_rest();

            return;
        }
    };

    if !is_admin {
        res.render(StatusError::forbidden().brief("Admin privileges required"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
