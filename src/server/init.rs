/**
 * Server Initialization
 *
 * Builds the application from its configuration: database pool, migrations,
 * token keys, state and router.
 *
 * # Initialization Steps
 *
 * 1. Connect the PostgreSQL pool (bounded acquire timeout - a request never
 *    blocks indefinitely waiting for a connection)
 * 2. Run the embedded migrations
 * 3. Derive the token keys from the configured secret
 * 4. Assemble the router with all routes and middleware
 *
 * Unlike a cache or broadcast layer, none of this is optional: a missing
 * database or secret is a startup failure, not a degraded mode.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::auth::tokens::TokenKeys;
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Fatal startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    /// The database is unreachable or refused the connection.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// The embedded migrations failed to apply.
    #[error("failed to run database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Create and configure the application
///
/// # Errors
///
/// [`StartupError`] if the pool cannot be created or migrations fail; the
/// caller is expected to abort startup.
pub async fn create_app(config: &AppConfig) -> Result<Router, StartupError> {
    tracing::info!("connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
        .map_err(StartupError::Database)?;

    tracing::info!("running database migrations");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(StartupError::Migrate)?;

    let state = AppState {
        pool,
        tokens: Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_secs)),
        bcrypt_cost: config.bcrypt_cost,
    };

    tracing::info!("application state initialized");

    Ok(create_router(state))
}
