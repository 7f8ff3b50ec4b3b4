//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, products::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product, oldest first.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
