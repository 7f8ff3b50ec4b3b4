//! Test context for service-level integration tests.

use crate::{
    auth::{DEFAULT_TOKEN_TTL, PgAuthService, TokenService},
    database::Db,
    domain::{carts::PgCartsService, products::PgProductsService, users::PgUsersService},
};

use super::db::TestDb;

pub struct TestContext {
    _db: TestDb,
    pub tokens: TokenService,
    pub auth: PgAuthService,
    pub users: PgUsersService,
    pub products: PgProductsService,
    pub carts: PgCartsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());
        let tokens = TokenService::new(b"test-secret", DEFAULT_TOKEN_TTL);

        Self {
            auth: PgAuthService::new(db.clone(), tokens.clone()),
            users: PgUsersService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db),
            tokens,
            _db: test_db,
        }
    }
}
