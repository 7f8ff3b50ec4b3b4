//! Cart Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{CartItemResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Cart Index Handler
///
/// Returns the caller's cart lines, oldest first.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let items = state
        .app
        .carts
        .get_cart(user.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
