//! Server configuration module

use clap::Parser;

use storefront_app::context::AppSettings;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    uploads::UploadsConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod uploads;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Session token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Image upload settings.
    #[command(flatten)]
    pub uploads: UploadsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings for assembling the application services.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            database_url: self.database.database_url.clone(),
            jwt_secret: self.auth.jwt_secret.clone(),
            token_ttl: self.auth.token_ttl(),
            upload_dir: self.uploads.upload_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_required_settings_with_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--jwt-secret",
            "s3cret",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.auth.token_ttl_hours, 24);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        let settings = config.app_settings();

        assert_eq!(settings.token_ttl, SignedDuration::from_hours(24));
        assert_eq!(settings.upload_dir.to_str(), Some("uploads"));
        assert_eq!(settings.jwt_secret, "s3cret");

        Ok(())
    }

    #[test]
    fn token_ttl_hours_is_configurable() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--database-url",
            "postgres://localhost/storefront",
            "--jwt-secret",
            "s3cret",
            "--token-ttl-hours",
            "2",
        ])?;

        assert_eq!(config.auth.token_ttl(), SignedDuration::from_hours(2));

        Ok(())
    }

    #[test]
    fn token_ttl_hours_out_of_range_is_rejected() {
        for hours in ["0", "87601", "9223372036854775807"] {
            let result = ServerConfig::try_parse_from([
                "storefront-json",
                "--database-url",
                "postgres://localhost/storefront",
                "--jwt-secret",
                "s3cret",
                "--token-ttl-hours",
                hours,
            ]);

            assert!(result.is_err(), "{hours} hours should be rejected");
        }
    }
}
