/**
 * User Profile HTTP Handlers
 *
 * All profile routes are protected. Mutation targets are never taken from
 * the request: `update_me` and `delete_me` operate on the authenticated
 * identity only.
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::accounts::update_password;
use crate::auth::handlers::signup::is_valid_username;
use crate::auth::password::{hash_password, PasswordError};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::handlers::ListQuery;
use crate::server::state::AppState;
use crate::users::db;
use crate::users::db::{UserPage, UserProfile};

/// Update-profile request body; both fields optional, at least one required
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New login name
    pub username: Option<String>,
    /// New password (re-hashed before storage)
    pub password: Option<String>,
}

/// GET /user/{id} - fetch one active profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = db::get_profile(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFoundOrForbidden)?;

    Ok(Json(profile))
}

/// GET /user - list active profiles
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::list_active_users(&state.pool, query.search.as_deref(), limit, offset).await?;

    Ok(Json(page))
}

/// GET /deleted-users - list soft-deleted profiles
pub async fn list_deleted_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::list_deleted_users(&state.pool, query.search.as_deref(), limit, offset).await?;

    Ok(Json(page))
}

/// PUT /user - update the caller's own username and/or password
///
/// Everything that can reject the request (validation, hashing) runs before
/// the first write, and the two updates share one transaction, so an error
/// response never leaves a half-applied profile behind.
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if request.username.is_none() && request.password.is_none() {
        return Err(ApiError::validation(
            "provide a username or a password to update",
        ));
    }

    if let Some(username) = &request.username {
        if !is_valid_username(username) {
            return Err(ApiError::validation(
                "username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
            ));
        }
    }

    let password_hash = match &request.password {
        Some(password) => Some(hash_password(password, state.bcrypt_cost).map_err(
            |err| match err {
                PasswordError::InvalidLength => ApiError::validation(err.to_string()),
                other => {
                    tracing::error!("password hashing failed: {other:?}");
                    ApiError::internal("password hashing failed")
                }
            },
        )?),
        None => None,
    };

    // an early return before commit rolls both writes back
    let mut tx = state.pool.begin().await?;

    if let Some(username) = &request.username {
        let affected = db::rename_user(&mut *tx, identity.id, username)
            .await
            .map_err(|err| {
                if err
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation())
                {
                    ApiError::DuplicateLogin
                } else {
                    ApiError::from(err)
                }
            })?;

        if affected == 0 {
            return Err(ApiError::NotFoundOrForbidden);
        }
    }

    if let Some(password_hash) = &password_hash {
        let affected = update_password(&mut *tx, identity.id, password_hash).await?;
        if affected == 0 {
            return Err(ApiError::NotFoundOrForbidden);
        }
    }

    tx.commit().await?;

    tracing::info!(user = %identity.username, "profile updated");

    Ok(Json(
        serde_json::json!({ "message": "success", "id": identity.id }),
    ))
}

/// DELETE /user - soft-delete the caller's own account
///
/// The issued token stays valid until it expires (there is no revocation
/// list), but the account no longer resolves for login or profile reads.
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = db::delete_user(&state.pool, identity.id).await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    tracing::info!(user = %identity.username, "account deleted");

    Ok(Json(
        serde_json::json!({ "message": "success", "id": identity.id }),
    ))
}
