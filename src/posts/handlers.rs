/**
 * Post HTTP Handlers
 *
 * The acting identity always comes from the [`AuthUser`] extractor seeded
 * by the authentication middleware; it is never accepted as a field of the
 * request body. Mutations that affect zero rows return 404 without
 * distinguishing "absent" from "not yours".
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db;
use crate::posts::db::{Post, PostPage};
use crate::server::state::AppState;

/// Pagination and search parameters shared by the list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 1-based page number (default 1)
    pub page: Option<u32>,
    /// Page size (default 10)
    pub limit: Option<u32>,
    /// Optional substring filter
    pub search: Option<String>,
}

impl ListQuery {
    /// Resolve to a bounded (limit, offset) pair
    pub fn limit_offset(&self) -> (i64, i64) {
        let page = i64::from(self.page.unwrap_or(1).max(1));
        let limit = i64::from(self.limit.unwrap_or(10).clamp(1, 100));
        (limit, (page - 1) * limit)
    }
}

/// Create-post request body
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Post text
    pub description: String,
    /// Attached photo URLs
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Update-post request body
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    /// Replacement post text
    pub description: String,
    /// Replacement photo URLs
    #[serde(default)]
    pub photos: Vec<String>,
}

/// POST /post - create a post owned by the caller
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if request.description.is_empty() {
        return Err(ApiError::validation("description must not be empty"));
    }

    let id = db::create_post(&state.pool, identity.id, &request.description, &request.photos)
        .await?;

    tracing::info!(%id, author = %identity.username, "post created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "created", "id": id })),
    ))
}

/// GET /post/{post_id} - fetch one active post
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let post = db::get_post(&state.pool, post_id)
        .await?
        .ok_or(ApiError::NotFoundOrForbidden)?;

    Ok(Json(post))
}

/// GET /posts/all - list active posts (public)
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::list_active_posts(&state.pool, query.search.as_deref(), limit, offset).await?;

    Ok(Json(page))
}

/// GET /deleted-posts - list soft-deleted posts
pub async fn list_deleted_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::list_deleted_posts(&state.pool, query.search.as_deref(), limit, offset).await?;

    Ok(Json(page))
}

/// GET /my/posts - list the caller's active posts
pub async fn list_my_posts(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<PostPage>, ApiError> {
    let (limit, offset) = query.limit_offset();
    let page = db::list_posts_by_author(&state.pool, identity.id, limit, offset).await?;

    Ok(Json(page))
}

/// PUT /post/{post_id} - update a post the caller owns
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if request.description.is_empty() {
        return Err(ApiError::validation("description must not be empty"));
    }

    let affected = db::update_post(
        &state.pool,
        identity.id,
        post_id,
        &request.description,
        &request.photos,
    )
    .await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    Ok(Json(serde_json::json!({ "message": "success", "id": post_id })))
}

/// DELETE /post/{post_id} - soft-delete a post the caller owns
pub async fn delete_post(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let affected = db::delete_post(&state.pool, identity.id, post_id).await?;

    if affected == 0 {
        return Err(ApiError::NotFoundOrForbidden);
    }

    tracing::info!(%post_id, actor = %identity.username, "post deleted");

    Ok(Json(serde_json::json!({ "message": "success", "id": post_id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery {
            page: None,
            limit: None,
            search: None,
        };
        assert_eq!(query.limit_offset(), (10, 0));
    }

    #[test]
    fn test_list_query_offset() {
        let query = ListQuery {
            page: Some(3),
            limit: Some(20),
            search: None,
        };
        assert_eq!(query.limit_offset(), (20, 40));
    }

    #[test]
    fn test_list_query_clamps_bad_input() {
        let query = ListQuery {
            page: Some(0),
            limit: Some(10_000),
            search: None,
        };
        let (limit, offset) = query.limit_offset();
        assert_eq!(limit, 100);
        assert_eq!(offset, 0);
    }
}
