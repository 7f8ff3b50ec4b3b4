//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::{
        products::{
            ProductsService, ProductsServiceError,
            models::{NewProduct, Product, ProductUuid},
        },
        users::{
            UsersServiceError,
            models::{NewAccount, User},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_user(ctx: &TestContext, email: &str) -> Result<User, UsersServiceError> {
    ctx.users
        .create_user(NewAccount {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "password".to_string(),
            is_admin: false,
        })
        .await
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    price: Decimal,
) -> Result<Product, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            price,
            image: None,
        })
        .await
}
