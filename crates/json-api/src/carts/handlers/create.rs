//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{CartItemResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_id: Option<Uuid>,
}

/// Add Cart Item Handler
///
/// Adds one of the product, incrementing the existing line if there is one.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created or incremented"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product ID is required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.add", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?;

    let Some(product) = json.into_inner().product_id else {
        return Err(StatusError::bad_request().brief("Product ID is required"));
    };

    let item = state
        .app
        .carts
        .add_item(user.uuid, product.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        user_uuid = %user.uuid,
        product_uuid = %product,
        quantity = item.quantity,
        "added cart item"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
