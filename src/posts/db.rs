/**
 * Post Model and Database Operations
 *
 * All mutations follow the ownership contract: the acting identity id is an
 * explicit parameter and the WHERE clause combines `id`, `created_by` and
 * `deleted_at IS NULL` in one statement, so the ownership check and the
 * write are atomic. Zero affected rows means "absent, already deleted, or
 * not yours" - the caller reports all three identically.
 *
 * Every interpolated value is bound as a parameter, including the optional
 * description search filter.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Post record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    /// Unique post id
    pub id: Uuid,
    /// Post text
    pub description: String,
    /// Attached photo URLs
    pub photos: Option<Vec<String>>,
    /// Identity that created the post; immutable after creation
    pub created_by: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Identity that performed the last update
    pub updated_by: Option<Uuid>,
    /// Soft-delete timestamp; set rows are excluded from active queries
    pub deleted_at: Option<DateTime<Utc>>,
    /// Identity that performed the soft delete
    pub deleted_by: Option<Uuid>,
}

/// One page of posts plus the total match count
#[derive(Debug, Serialize)]
pub struct PostPage {
    /// Posts on this page
    pub posts: Vec<Post>,
    /// Total rows matching the filter
    pub count: i64,
}

const POST_COLUMNS: &str = r#"
    id, description, photos, created_by, created_at,
    updated_at, updated_by, deleted_at, deleted_by
"#;

/// Create a post owned by `actor`
pub async fn create_post(
    pool: &PgPool,
    actor: Uuid,
    description: &str,
    photos: &[String],
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO posts (id, description, photos, created_by, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        "#,
    )
    .bind(id)
    .bind(description)
    .bind(photos)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Fetch one active post by id
pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts
        WHERE deleted_at IS NULL AND id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List active posts, newest first, with an optional description search
pub async fn list_active_posts(
    pool: &PgPool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<PostPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM posts
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR description ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(search)
    .fetch_one(pool)
    .await?;

    let posts = sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR description ILIKE '%' || $1 || '%')
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(search)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PostPage { posts, count })
}

/// List soft-deleted posts, newest first
pub async fn list_deleted_posts(
    pool: &PgPool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<PostPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM posts
        WHERE deleted_at IS NOT NULL
          AND ($1::text IS NULL OR description ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(search)
    .fetch_one(pool)
    .await?;

    let posts = sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts
        WHERE deleted_at IS NOT NULL
          AND ($1::text IS NULL OR description ILIKE '%' || $1 || '%')
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(search)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PostPage { posts, count })
}

/// List the active posts created by `actor`
pub async fn list_posts_by_author(
    pool: &PgPool,
    actor: Uuid,
    limit: i64,
    offset: i64,
) -> Result<PostPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM posts
        WHERE deleted_at IS NULL AND created_by = $1
        "#,
    )
    .bind(actor)
    .fetch_one(pool)
    .await?;

    let posts = sqlx::query_as::<_, Post>(&format!(
        r#"
        SELECT {POST_COLUMNS}
        FROM posts
        WHERE deleted_at IS NULL AND created_by = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(actor)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(PostPage { posts, count })
}

/// Update a post's content, only if `actor` created it
///
/// Returns the number of affected rows; zero means the post is absent,
/// already deleted, or owned by someone else.
pub async fn update_post(
    pool: &PgPool,
    actor: Uuid,
    id: Uuid,
    description: &str,
    photos: &[String],
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET description = $1,
            photos = $2,
            updated_at = NOW(),
            updated_by = $3
        WHERE id = $4 AND created_by = $3 AND deleted_at IS NULL
        "#,
    )
    .bind(description)
    .bind(photos)
    .bind(actor)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Soft-delete a post, only if `actor` created it
///
/// Two concurrent deletes by the owner race harmlessly: the row-level
/// atomicity of the UPDATE guarantees exactly one reports an affected row
/// and the other sees zero.
pub async fn delete_post(pool: &PgPool, actor: Uuid, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET deleted_at = NOW(),
            deleted_by = $1
        WHERE id = $2 AND created_by = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(actor)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
