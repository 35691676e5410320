/**
 * Sign-up Handler
 *
 * POST /auth/sign-up - creates an account from a username and password.
 *
 * # Registration Process
 *
 * 1. Validate the username format and password length
 * 2. Hash the password with bcrypt
 * 3. Insert the account row (typed conflict on duplicate active username)
 * 4. Return 201 with the new account id
 *
 * # Security
 *
 * - The plaintext password is hashed immediately and never logged
 * - A duplicate username returns 409 without touching the existing account
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::accounts::{create_account, AccountError};
use crate::auth::handlers::types::{SignUpRequest, SignUpResponse};
use crate::auth::password::{hash_password, PasswordError};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Validate username format
///
/// Usernames must be 3-30 characters, start with a letter, and contain only
/// alphanumeric characters and underscores.
pub(crate) fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign-up handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username format or unusable password
/// * `409 Conflict` - username already taken by an active account
/// * `500 Internal Server Error` - hashing or storage failure
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), ApiError> {
    tracing::info!(username = %request.username, "sign-up request");

    if !is_valid_username(&request.username) {
        return Err(ApiError::validation(
            "username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    let password_hash = hash_password(&request.password, state.bcrypt_cost).map_err(
        |err| match err {
            PasswordError::InvalidLength => ApiError::validation(err.to_string()),
            other => {
                tracing::error!("password hashing failed: {other:?}");
                ApiError::internal("password hashing failed")
            }
        },
    )?;

    let id = create_account(&state.pool, &request.username, &password_hash)
        .await
        .map_err(|err| match err {
            AccountError::DuplicateLogin => {
                tracing::warn!(username = %request.username, "duplicate sign-up");
                ApiError::DuplicateLogin
            }
            AccountError::Database(db_err) => {
                tracing::error!("account creation failed: {db_err:?}");
                ApiError::internal("account creation failed")
            }
        })?;

    tracing::info!(username = %request.username, %id, "account created");

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "created".to_string(),
            id,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("ann"));
        assert!(is_valid_username("bob_2024"));
        assert!(is_valid_username("Zed"));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("1ann"));
        assert!(!is_valid_username("_ann"));
        assert!(!is_valid_username("ann smith"));
        assert!(!is_valid_username("ann@home"));
        assert!(!is_valid_username(&"x".repeat(31)));
    }
}
