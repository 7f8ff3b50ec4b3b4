//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove From Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found in cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;
    let product = product.into_inner();

    state
        .app
        .carts
        .remove_item(user.uuid, product.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(user_uuid = %user.uuid, product_uuid = %product, "removed cart item");

    Ok(StatusCode::NO_CONTENT)
}
