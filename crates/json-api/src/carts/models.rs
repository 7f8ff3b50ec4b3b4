//! Cart response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::models::CartItem;

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.uuid.into_uuid(),
            product_id: item.product_uuid.into_uuid(),
            quantity: item.quantity,
        }
    }
}
