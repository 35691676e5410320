/**
 * Application State
 *
 * The state shared across all handlers. There is no shared mutable
 * in-process state between requests: the pool manages its own connections
 * and the token keys are immutable after startup, so correctness of
 * concurrent mutations rests entirely on the single conditional SQL
 * statements in the domain modules.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::tokens::TokenKeys;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Token signing/verification material, immutable after startup
    pub tokens: Arc<TokenKeys>,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}
