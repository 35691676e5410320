/**
 * User Profile Database Operations
 *
 * Reads select everything except `password_hash`; the hash never leaves
 * the accounts module. Mutations are conditioned on `deleted_at IS NULL`
 * with the caller's own id, keeping the self-ownership check and the write
 * atomic.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

/// Public view of an account
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserProfile {
    /// Stable identity id
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-delete timestamp
    pub deleted_at: Option<DateTime<Utc>>,
}

/// One page of profiles plus the total match count
#[derive(Debug, Serialize)]
pub struct UserPage {
    /// Profiles on this page
    pub users: Vec<UserProfile>,
    /// Total rows matching the filter
    pub count: i64,
}

/// Fetch one active profile by id
pub async fn get_profile(pool: &PgPool, id: Uuid) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, created_at, updated_at, deleted_at
        FROM users
        WHERE deleted_at IS NULL AND id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List active profiles with an optional username search
pub async fn list_active_users(
    pool: &PgPool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<UserPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM users
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR username ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(search)
    .fetch_one(pool)
    .await?;

    let users = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, created_at, updated_at, deleted_at
        FROM users
        WHERE deleted_at IS NULL
          AND ($1::text IS NULL OR username ILIKE '%' || $1 || '%')
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(search)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(UserPage { users, count })
}

/// List soft-deleted profiles
pub async fn list_deleted_users(
    pool: &PgPool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<UserPage, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM users
        WHERE deleted_at IS NOT NULL
          AND ($1::text IS NULL OR username ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(search)
    .fetch_one(pool)
    .await?;

    let users = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, created_at, updated_at, deleted_at
        FROM users
        WHERE deleted_at IS NOT NULL
          AND ($1::text IS NULL OR username ILIKE '%' || $1 || '%')
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(search)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(UserPage { users, count })
}

/// Rename the caller's own account
///
/// The active-username unique index still applies; the caller maps a unique
/// violation to the duplicate-login error. Takes any executor so a profile
/// update can run it inside a transaction alongside the password change.
pub async fn rename_user<'e>(
    executor: impl PgExecutor<'e>,
    actor: Uuid,
    username: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET username = $1, updated_at = NOW()
        WHERE id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(username)
    .bind(actor)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Soft-delete the caller's own account
pub async fn delete_user(pool: &PgPool, actor: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET deleted_at = NOW()
        WHERE id = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(actor)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
