/**
 * Like Database Operations
 *
 * Adds are single INSERTs resolved against the one-active-like unique index
 * with `ON CONFLICT ... DO NOTHING`, so two concurrent likes by one user
 * race on the index instead of a visibility check: the loser affects zero
 * rows and reports "already liked" rather than erroring. Removals
 * soft-delete the caller's own like only; there is no path to remove
 * another identity's like.
 */

use sqlx::PgPool;
use uuid::Uuid;

/// Add a like on a post; returns false if the user already likes it
pub async fn add_post_like(pool: &PgPool, actor: Uuid, post_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO post_likes (id, post_id, user_id, created_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (post_id, user_id) WHERE deleted_at IS NULL DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(post_id)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete the caller's own like on a post
pub async fn remove_post_like(
    pool: &PgPool,
    actor: Uuid,
    post_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE post_likes
        SET deleted_at = NOW()
        WHERE post_id = $1 AND user_id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(post_id)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Count the active likes on a post
pub async fn post_like_count(pool: &PgPool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(id)
        FROM post_likes
        WHERE deleted_at IS NULL AND post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await
}

/// Add a like on a comment; returns false if the user already likes it
pub async fn add_comment_like(
    pool: &PgPool,
    actor: Uuid,
    comment_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO comment_likes (id, comment_id, user_id, created_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (comment_id, user_id) WHERE deleted_at IS NULL DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(comment_id)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete the caller's own like on a comment
pub async fn remove_comment_like(
    pool: &PgPool,
    actor: Uuid,
    comment_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE comment_likes
        SET deleted_at = NOW()
        WHERE comment_id = $1 AND user_id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(comment_id)
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Count the active likes on a comment
pub async fn comment_like_count(pool: &PgPool, comment_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(id)
        FROM comment_likes
        WHERE deleted_at IS NULL AND comment_id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_one(pool)
    .await
}
