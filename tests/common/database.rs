//! Database test fixture
//!
//! Connects to the database named by `TEST_DATABASE_URL` and runs the
//! crate's migrations. Tests that need live storage skip themselves when
//! the variable is unset, so the suite still passes on machines without
//! Postgres.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Live-database fixture for storage-backed tests
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect to the configured test database and migrate it
    ///
    /// Returns `None` when `TEST_DATABASE_URL` is unset; callers return
    /// early in that case. Tests do not truncate shared tables, so they
    /// stay isolated by using fresh identities instead.
    pub async fn connect() -> Option<Self> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("failed to connect to the test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
