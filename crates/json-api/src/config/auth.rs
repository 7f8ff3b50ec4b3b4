//! Auth Config

use clap::Args;
use jiff::SignedDuration;

/// Longest accepted token lifetime, ten years.
pub const MAX_TOKEN_TTL_HOURS: i64 = 87_600;

/// Session token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign session tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Session token lifetime in hours
    #[arg(long, env = "TOKEN_TTL_HOURS", default_value_t = 24_i64, value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_HOURS))]
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    /// Token lifetime as a duration.
    #[must_use]
    pub fn token_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(self.token_ttl_hours)
    }
}
