//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_app::domain::products::models::{NewProduct, ProductUuid};

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error, parse_price},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: Option<String>,
    /// A non-negative number, or a string holding one
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Value>,
    pub image: Option<String>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = StatusError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(price)) = (
            request.name.filter(|name| !name.trim().is_empty()),
            request.price,
        ) else {
            return Err(StatusError::bad_request().brief("Name and price are required"));
        };

        Ok(NewProduct {
            uuid: ProductUuid::new(),
            name: name.trim().to_string(),
            price: parse_price(&price)?,
            image: request.image,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin privileges required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %product.uuid, "created product");

    Ok(Json(product.into()))
}
