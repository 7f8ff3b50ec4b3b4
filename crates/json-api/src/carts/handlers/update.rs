//! Set Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{CartItemResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Set Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetQuantityRequest {
    /// Zero or less removes the line
    pub quantity: Option<i64>,
}

/// Set Cart Item Quantity Handler
///
/// Responds with the updated line, or with no content when the line was removed.
#[endpoint(
    tags("cart"),
    summary = "Set Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated", body = CartItemResponse),
        (status_code = StatusCode::NO_CONTENT, description = "Line removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Quantity is required"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found in cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.set_quantity", skip(product, json, depot, res), err)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<SetQuantityRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;
    let product = product.into_inner();

    let Some(quantity) = json.into_inner().quantity else {
        return Err(StatusError::bad_request().brief("Quantity is required"));
    };

    let item = state
        .app
        .carts
        .set_quantity(user.uuid, product.into(), quantity)
        .await
        .map_err(into_status_error)?;

    tracing::info!(user_uuid = %user.uuid, product_uuid = %product, quantity, "set cart item quantity");

    let Some(item) = item else {
        return Ok(StatusCode::NO_CONTENT);
    };

    res.render(Json(CartItemResponse::from(item)));

    Ok(StatusCode::OK)
}
