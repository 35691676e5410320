/**
 * Login Handler
 *
 * POST /auth/login - verifies credentials and issues a bearer token.
 *
 * # Authentication Process
 *
 * 1. Resolve the username to the stored credential row
 * 2. Verify the password against the bcrypt hash
 * 3. Issue a signed, time-limited token
 *
 * # Security
 *
 * - Unknown username and wrong password produce the identical 401 response,
 *   so the endpoint cannot be used to enumerate accounts
 * - A malformed stored hash is an internal failure and returns an opaque
 *   500; the client cannot tell it apart from any other server error
 * - Neither the password nor the hash ever reaches a log line
 */

use axum::{extract::State, response::Json};

use crate::auth::accounts::find_by_username;
use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::password::{verify_password, PasswordError};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password (one message)
/// * `500 Internal Server Error` - storage, hash or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!(username = %request.username, "login request");

    let account = find_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %request.username, "login for unknown username");
            ApiError::InvalidCredentials
        })?;

    verify_password(&account.password_hash, &request.password).map_err(|err| match err {
        PasswordError::Mismatch => {
            tracing::warn!(username = %request.username, "wrong password");
            ApiError::InvalidCredentials
        }
        other => {
            tracing::error!(username = %request.username, "password verification failed: {other:?}");
            ApiError::internal("password verification failed")
        }
    })?;

    let token = state
        .tokens
        .issue(account.id, &account.username)
        .map_err(|err| {
            tracing::error!("token issuance failed: {err:?}");
            ApiError::internal("token issuance failed")
        })?;

    tracing::info!(username = %account.username, "login succeeded");

    Ok(Json(LoginResponse { token }))
}
