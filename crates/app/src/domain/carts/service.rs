//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartItem, CartItemUuid},
            repository::PgCartItemsRepository,
        },
        products::models::ProductUuid,
        users::models::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, user: UserUuid) -> Result<Vec<CartItem>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<CartItem, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self
            .repository
            .upsert_item(&mut tx, CartItemUuid::new(), user, product)
            .await?;

        tx.commit().await?;

        info!(%user, %product, quantity = item.quantity, "cart item added");

        Ok(item)
    }

    async fn set_quantity(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Option<CartItem>, CartsServiceError> {
        if quantity <= 0 {
            self.remove_item(user, product).await?;

            return Ok(None);
        }

        let quantity = i32::try_from(quantity).map_err(|_| CartsServiceError::InvalidData)?;

        let mut tx = self.db.begin().await?;

        let item = self
            .repository
            .set_quantity(&mut tx, user, product, quantity)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        tx.commit().await?;

        info!(%user, %product, quantity, "cart item quantity set");

        Ok(Some(item))
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_item(&mut tx, user, product).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%user, %product, "cart item removed");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// All of the user's cart lines, oldest first.
    async fn get_cart(&self, user: UserUuid) -> Result<Vec<CartItem>, CartsServiceError>;

    /// Add one of `product` to the user's cart, incrementing an existing line.
    async fn add_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<CartItem, CartsServiceError>;

    /// Set the quantity of an existing line. A quantity of zero or less removes
    /// the line and returns `None`.
    async fn set_quantity(
        &self,
        user: UserUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Option<CartItem>, CartsServiceError>;

    /// Remove the user's line for `product`.
    async fn remove_item(
        &self,
        user: UserUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;
}
