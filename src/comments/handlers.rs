/**
 * Comment HTTP Handlers
 *
 * Reading a post's comments is public; every mutation and the "my comments"
 * listing sit behind the authentication middleware.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::comments::db;
use crate::comments::db::CommentPage;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::handlers::ListQuery;
use crate::server::state::AppState;

/// Create-comment request body
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Comment text
    pub comment: String,
}

/// Update-comment request body
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    /// Comment to update
    pub id: Uuid,
    /// Replacement text
    pub comment: String,
}

/// POST /comment/{post_id} - comment on a post
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if request.comment.is_empty() {
        return Err(ApiError::validation("comment must not be empty"));
    }

    // commenting on a missing or deleted post is a 404, not a broken FK
    let id = db::create_comment(&state.pool, identity.id, post_id, &request.comment)
        .await?
        .ok_or(ApiError::NotFoundOrForbidden)?;

    tracing::info!(%id, %post_id, author = %identity.username, "comment created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "created", "id": id })),
    ))
}

/// GET /post/comment/by/post/{post_id} - list a post's comments (public)
pub async fn list_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CommentPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::comments_for_post(&state.pool, post_id, limit, offset).await?;

    Ok(Json(page))
}

/// GET /my/comments - list the caller's comments
pub async fn list_my_comments(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<CommentPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::comments_by_author(&state.pool, identity.id, limit, offset).await?;

    Ok(Json(page))
}

/// PUT /comment - update a comment the caller owns
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if request.comment.is_empty() {
        return Err(ApiError::validation("comment must not be empty"));
    }

    let affected =
        db::update_comment(&state.pool, identity.id, request.id, &request.comment).await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    Ok(Json(
        serde_json::json!({ "message": "success", "id": request.id }),
    ))
}

/// DELETE /comment/{id} - soft-delete a comment the caller owns
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = db::delete_comment(&state.pool, identity.id, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    Ok(Json(serde_json::json!({ "message": "success", "id": id })))
}
