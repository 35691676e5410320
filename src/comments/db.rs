/**
 * Comment Model and Database Operations
 *
 * Same ownership contract as posts: actor id as an explicit parameter,
 * check and mutation in one conditional statement, zero affected rows
 * reported as not-found-or-forbidden by the caller.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Comment record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment id
    pub id: Uuid,
    /// Post this comment belongs to
    pub post_id: Uuid,
    /// Comment text
    pub comment: String,
    /// Identity that created the comment; immutable after creation
    pub created_by: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Identity that performed the last update
    pub updated_by: Option<Uuid>,
    /// Soft-delete timestamp
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One page of comments plus the total match count
#[derive(Debug, Serialize)]
pub struct CommentPage {
    /// Comments on this page
    pub comments: Vec<Comment>,
    /// Total rows matching the filter
    pub count: i64,
}

const COMMENT_COLUMNS: &str = r#"
    id, post_id, comment, created_by, created_at,
    updated_at, updated_by, deleted_at
"#;

/// Create a comment on a post, owned by `actor`
///
/// The insert and the post liveness check are one statement, so a post
/// soft-deleted in between cannot slip a comment through. Returns `None`
/// when the post is absent or deleted.
pub async fn create_comment(
    pool: &PgPool,
    actor: Uuid,
    post_id: Uuid,
    comment: &str,
) -> Result<Option<Uuid>, sqlx::Error> {
    let id = Uuid::new_v4();

    let result = sqlx::query(
        r#"
        INSERT INTO post_comments (id, post_id, comment, created_by, created_at)
        SELECT $1, $2, $3, $4, NOW()
        WHERE EXISTS (
            SELECT 1 FROM posts WHERE id = $2 AND deleted_at IS NULL
        )
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(comment)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok((result.rows_affected() > 0).then_some(id))
}

/// List the active comments of a post, oldest first
pub async fn comments_for_post(
    pool: &PgPool,
    post_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<CommentPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM post_comments
        WHERE deleted_at IS NULL AND post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    let comments = sqlx::query_as::<_, Comment>(&format!(
        r#"
        SELECT {COMMENT_COLUMNS}
        FROM post_comments
        WHERE deleted_at IS NULL AND post_id = $1
        ORDER BY created_at ASC
        LIMIT $2 OFFSET $3
        "#
    ))
    .bind(post_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(CommentPage { comments, count })
}

/// List the active comments written by `actor`, newest first
pub async fn comments_by_author(
    pool: &PgPool,
    actor: Uuid,
    limit: i64,
    offset: i64,
) -> Result<CommentPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM post_comments
        WHERE deleted_at IS NULL AND created_by = $1
        "#,
    )
    .bind(actor)
    .fetch_one(pool)
    .await?;

    let comments = sqlx::query_as::<_, Comment>(&format!(
        r#"
        SELECT {COMMENT_COLUMNS}
        FROM post_comments
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

    Ok(CommentPage { comments, count })
}

/// Update a comment's text, only if `actor` created it
pub async fn update_comment(
    pool: &PgPool,
    actor: Uuid,
    id: Uuid,
    comment: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE post_comments
        SET comment = $1,
            updated_at = NOW(),
            updated_by = $2
        WHERE id = $3 AND created_by = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(comment)
    .bind(actor)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Soft-delete a comment, only if `actor` created it
pub async fn delete_comment(pool: &PgPool, actor: Uuid, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE post_comments
        SET deleted_at = NOW()
        WHERE id = $1 AND created_by = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(id)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
