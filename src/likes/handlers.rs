/**
 * Like HTTP Handlers
 *
 * Like counts are public; adding and removing likes require a valid token.
 * The target id comes from the body (add/remove) or the path (counts); the
 * liking identity always comes from the middleware.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::likes::db;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Post-like request body (add and remove)
#[derive(Debug, Deserialize)]
pub struct PostLikeRequest {
    /// Target post
    pub post_id: Uuid,
}

/// Comment-like request body (add and remove)
#[derive(Debug, Deserialize)]
pub struct CommentLikeRequest {
    /// Target comment
    pub comment_id: Uuid,
}

/// POST /like - like a post (idempotent)
pub async fn create_post_like(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<PostLikeRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let inserted = db::add_post_like(&state.pool, identity.id, request.post_id).await?;

    // an existing like is not an error; the end state is identical
    let message = if inserted { "liked" } else { "already liked" };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": message })),
    ))
}

/// DELETE /like - remove the caller's like from a post
pub async fn delete_post_like(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<PostLikeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = db::remove_post_like(&state.pool, identity.id, request.post_id).await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    Ok(Json(serde_json::json!({ "message": "like removed" })))
}

/// GET /like-count/{post_id} - active like count of a post (public)
pub async fn get_post_like_count(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let count = db::post_like_count(&state.pool, post_id).await?;

    Ok(Json(serde_json::json!({ "post_id": post_id, "count": count })))
}

/// POST /comment-like - like a comment (idempotent)
pub async fn create_comment_like(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CommentLikeRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let inserted = db::add_comment_like(&state.pool, identity.id, request.comment_id).await?;

    let message = if inserted { "liked" } else { "already liked" };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": message })),
    ))
}

/// DELETE /comment-like - remove the caller's like from a comment
pub async fn delete_comment_like(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CommentLikeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = db::remove_comment_like(&state.pool, identity.id, request.comment_id).await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    Ok(Json(serde_json::json!({ "message": "like removed" })))
}

/// GET /comment-like/{comment_id} - active like count of a comment (public)
pub async fn get_comment_like_count(
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let count = db::comment_like_count(&state.pool, comment_id).await?;

    Ok(Json(
        serde_json::json!({ "comment_id": comment_id, "count": count }),
    ))
}
