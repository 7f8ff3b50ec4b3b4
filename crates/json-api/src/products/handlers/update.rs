//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error, parse_price, present},
    state::State,
};

/// Update Product Request
///
/// Absent fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<String>))]
    pub image: Option<Option<String>>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductUpdate {
            name: request.name.map(|name| name.trim().to_string()),
            price: request.price.as_ref().map(parse_price).transpose()?,
            image: request.image,
        })
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin privileges required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let updated = state
        .app
        .products
        .update_product(product.into(), json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, "updated product");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").put(handler))
    }

    fn strict(mut repo: MockProductsService) -> MockProductsService {
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_delete_product().never();

        repo
    }

    #[tokio::test]
    async fn test_update_product_applies_present_fields_only() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == ProductUpdate {
                            name: None,
                            price: Some(Decimal::new(1299, 2)),
                            image: None,
                        }
            })
            .return_once(move |_, _| {
                let mut product = make_product(uuid);

                product.price = Decimal::new(1299, 2);

                Ok(product)
            });

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "price": "12.99" }))
            .send(&make_service(strict(repo)))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert!((body.price - 12.99).abs() < f64::EPSILON, "price was {}", body.price);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_null_image_clears_image() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == ProductUpdate {
                            name: None,
                            price: None,
                            image: Some(None),
                        }
            })
            .return_once(move |_, _| Ok(make_product(uuid)));

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "image": null }))
            .send(&make_service(strict(repo)))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.image, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_sets_image() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|_, update| update.image == Some(Some("boot.png".to_string())))
            .return_once(move |_, _| {
                let mut product = make_product(uuid);

                product.image = Some("boot.png".to_string());

                Ok(product)
            });

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "image": "boot.png" }))
            .send(&make_service(strict(repo)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/products/{}", Uuid::now_v7()))
            .json(&json!({ "name": "Boot" }))
            .send(&make_service(strict(repo)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_uuid_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/products/123")
            .json(&json!({ "name": "Boot" }))
            .send(&make_service(strict(repo)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put(format!("http://example.com/products/{}", Uuid::now_v7()))
            .json(&json!({ "price": -1 }))
            .send(&make_service(strict(repo)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_blank_name_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::MissingRequiredData));

        let res = TestClient::put(format!("http://example.com/products/{}", Uuid::now_v7()))
            .json(&json!({ "name": "  " }))
            .send(&make_service(strict(repo)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
