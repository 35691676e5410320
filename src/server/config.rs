/**
 * Server Configuration
 *
 * Typed configuration loaded from the environment exactly once at startup.
 * The token secret in particular is read here and nowhere else: it flows
 * into [`crate::auth::tokens::TokenKeys`] by value and is never re-read or
 * hot-reloaded while the process runs.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `JWT_SECRET` (required) - symmetric token signing secret
 * - `BIND_ADDR` (default `0.0.0.0:8080`)
 * - `TOKEN_TTL_SECS` (default `3600`)
 * - `BCRYPT_COST` (default bcrypt's standard cost)
 */

use thiserror::Error;

/// Configuration loading failures; all fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("environment variable {0} is not a valid {1}")]
    Invalid(&'static str, &'static str),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Symmetric secret for token signing and verification
    pub jwt_secret: String,
    /// Socket address the server listens on
    pub bind_addr: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if a required variable is missing or a value does
    /// not parse. Startup aborts on any of these.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let token_ttl_secs = match std::env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid("TOKEN_TTL_SECS", "integer"))?,
            Err(_) => 3600,
        };

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid("BCRYPT_COST", "integer"))?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            token_ttl_secs,
            bcrypt_cost,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
