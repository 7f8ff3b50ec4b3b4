//! App Context

use std::{io, path::PathBuf, sync::Arc};

use jiff::SignedDuration;
use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, PgAuthService, TokenService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        products::{PgProductsService, ProductsService},
    },
    uploads::{LocalUploadStore, UploadsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),

    #[error("failed to prepare upload directory")]
    Uploads(#[source] io::Error),
}

/// Settings needed to assemble an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: SignedDuration,
    pub upload_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub uploads: Arc<dyn UploadsService>,
}

impl AppContext {
    /// Connect to the database, apply pending migrations, prepare the upload
    /// directory and build every service.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable, a migration fails,
    /// or the upload directory cannot be created.
    pub async fn from_settings(settings: AppSettings) -> Result<Self, AppInitError> {
        let pool = database::connect(&settings.database_url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        info!("database migrations applied");

        let uploads = LocalUploadStore::open(settings.upload_dir)
            .await
            .map_err(AppInitError::Uploads)?;

        let db = Db::new(pool);
        let tokens = TokenService::new(settings.jwt_secret.as_bytes(), settings.token_ttl);

        Ok(Self {
            auth: Arc::new(PgAuthService::new(db.clone(), tokens)),
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db)),
            uploads: Arc::new(uploads),
        })
    }
}
