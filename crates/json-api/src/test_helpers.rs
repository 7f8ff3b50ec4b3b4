//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{CartItem, CartItemUuid},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        users::models::{User, UserUuid},
    },
    uploads::MockUploadsService,
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_ADMIN: UserUuid = UserUuid::from_uuid(Uuid::from_u128(2));

const MULTIPART_BOUNDARY: &str = "storefront-test-boundary";

pub(crate) fn make_user(uuid: UserUuid) -> User {
    let is_admin = uuid == TEST_ADMIN;

    User {
        uuid,
        name: if is_admin { "Admin" } else { "Shopper" }.to_string(),
        email: if is_admin {
            "admin@example.com"
        } else {
            "shopper@example.com"
        }
        .to_string(),
        is_admin,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Shoe".to_string(),
        price: Decimal::new(999, 2),
        image: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(product: ProductUuid, quantity: u32) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        user_uuid: TEST_USER,
        product_uuid: product,
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A single-part `multipart/form-data` body and its content type.
pub(crate) fn multipart_body(field: &str, file_name: &str, contents: &str) -> (String, String) {
    let body = format!(
        "--{MULTIPART_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}\r\n\
         --{MULTIPART_BOUNDARY}--\r\n"
    );

    (
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        body,
    )
}

/// Attaches a fixed user to the depot, standing in for the auth middleware.
pub(crate) struct InjectUser(pub(crate) UserUuid);

#[salvo::handler]
impl InjectUser {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_current_user(make_user(self.0));
        ctrl.call_next(req, depot, res).await;
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_register().never();
    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_set_quantity().never();
    carts.expect_remove_item().never();

    carts
}

fn strict_uploads_mock() -> MockUploadsService {
    let mut uploads = MockUploadsService::new();

    uploads.expect_store().never();

    uploads
}

/// Mocked services for a [`State`]; unset services reject every call.
#[derive(Default)]
pub(crate) struct MockServices {
    pub(crate) auth: Option<MockAuthService>,
    pub(crate) products: Option<MockProductsService>,
    pub(crate) carts: Option<MockCartsService>,
    pub(crate) uploads: Option<MockUploadsService>,
}

impl MockServices {
    pub(crate) fn into_context(self) -> AppContext {
        AppContext {
            auth: Arc::new(self.auth.unwrap_or_else(strict_auth_mock)),
            products: Arc::new(self.products.unwrap_or_else(strict_products_mock)),
            carts: Arc::new(self.carts.unwrap_or_else(strict_carts_mock)),
            uploads: Arc::new(self.uploads.unwrap_or_else(strict_uploads_mock)),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(self.into_context())
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    MockServices {
        auth: Some(auth),
        ..MockServices::default()
    }
    .into_state()
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_auth(auth))).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = MockServices {
        products: Some(products),
        ..MockServices::default()
    }
    .into_state();

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(InjectUser(TEST_ADMIN))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let state = MockServices {
        carts: Some(carts),
        ..MockServices::default()
    }
    .into_state();

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(InjectUser(TEST_USER))
            .push(route),
    )
}

pub(crate) fn uploads_service(uploads: MockUploadsService, route: Router) -> Service {
    let state = MockServices {
        uploads: Some(uploads),
        ..MockServices::default()
    }
    .into_state();

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(InjectUser(TEST_ADMIN))
            .push(route),
    )
}
