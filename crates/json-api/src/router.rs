//! App Router

use std::path::Path;

use salvo::{Router, serve_static::StaticDir};

use crate::{
    auth::{
        self,
        middleware::{admin_only, authenticated},
    },
    carts, healthcheck, products, uploads,
};

/// Every public route. Shared state and request logging are added by the caller.
pub(crate) fn app_router(upload_dir: &Path) -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("uploads/{**path}").get(StaticDir::new([upload_dir.to_path_buf()])),
        )
        .push(
            Router::with_path("api")
                .push(Router::with_path("auth/register").post(auth::handlers::register::handler))
                .push(Router::with_path("auth/login").post(auth::handlers::login::handler))
                .push(
                    Router::new()
                        .hoop(authenticated)
                        .push(
                            Router::with_path("products")
                                .get(products::index::handler)
                                .push(Router::new().hoop(admin_only).post(products::create::handler))
                                .push(
                                    Router::with_path("{product}")
                                        .get(products::get::handler)
                                        .push(
                                            Router::new()
                                                .hoop(admin_only)
                                                .put(products::update::handler)
                                                .delete(products::delete::handler),
                                        ),
                                ),
                        )
                        .push(
                            Router::with_path("cart")
                                .get(carts::index::handler)
                                .post(carts::create::handler)
                                .push(
                                    Router::with_path("{product}")
                                        .put(carts::update::handler)
                                        .delete(carts::delete::handler),
                                ),
                        )
                        .push(
                            Router::with_path("upload")
                                .hoop(admin_only)
                                .post(uploads::create::handler),
                        ),
                ),
        )
}
