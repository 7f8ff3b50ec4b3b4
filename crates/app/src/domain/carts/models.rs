//! Cart Models

use jiff::Timestamp;

use crate::{
    domain::{products::models::ProductUuid, users::models::UserUuid},
    uuids::TypedUuid,
};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItem>;

/// CartItem Model
///
/// One row per (user, product) pair; `quantity` is always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
