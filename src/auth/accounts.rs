/**
 * Account Store
 *
 * Persists hashed credentials and resolves a login name to the stored
 * credential row. This is the only module that reads `password_hash` back
 * out of the database; `find_by_username` exists for the login handler alone
 * and must not be wired into any other route.
 */

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use thiserror::Error;
use uuid::Uuid;

/// Stored credential row for an account
///
/// `password_hash` is the bcrypt output, never the plaintext, and is never
/// serialized into a response.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Stable identity id
    pub id: Uuid,
    /// Unique login name (among non-deleted accounts)
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Account creation failures
#[derive(Debug, Error)]
pub enum AccountError {
    /// The username is already taken by an active account.
    ///
    /// Surfaced from the partial unique index as a typed error rather than
    /// a raw database error.
    #[error("username already exists")]
    DuplicateLogin,

    /// Any other storage failure.
    #[error("database error")]
    Database(#[source] sqlx::Error),
}

/// Create an account with an already-hashed password
///
/// # Errors
///
/// * [`AccountError::DuplicateLogin`] - unique violation on the active
///   username index
/// * [`AccountError::Database`] - any other storage failure
pub async fn create_account(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<Uuid, AccountError> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, created_at)
        VALUES ($1, $2, $3, NOW())
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await
    .map_err(|err| {
        if err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            AccountError::DuplicateLogin
        } else {
            AccountError::Database(err)
        }
    })?;

    Ok(id)
}

/// Resolve a login name to the stored credential row
///
/// Only active (non-deleted) accounts resolve. Used exclusively by the
/// login flow.
pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Re-hash and store a new password for an account
///
/// Ownership is implicit: the id comes from the caller's verified identity,
/// and the conditional UPDATE refuses soft-deleted accounts. Takes any
/// executor so a profile update can run it inside a transaction.
pub async fn update_password<'e>(
    executor: impl PgExecutor<'e>,
    identity_id: Uuid,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $1, updated_at = NOW()
        WHERE id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(password_hash)
    .bind(identity_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
