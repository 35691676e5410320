//! Socialnet Backend Library
//!
//! A social-content backend: accounts, posts, comments and likes behind a
//! REST interface. Authentication is stateless (JWT bearer tokens) and every
//! mutation of user-created content is ownership-scoped: only the identity
//! recorded as a record's creator may update or soft-delete it.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`auth`** - Credential hashing, token issuance/validation, account store
//!   and the sign-up/login handlers
//! - **`middleware`** - The authentication gate that turns a bearer token into
//!   a request-scoped [`middleware::auth::Identity`]
//! - **`error`** - The API error taxonomy and its HTTP response conversion
//! - **`posts`**, **`comments`**, **`likes`**, **`users`** - Domain modules,
//!   each with its database operations and HTTP handlers
//! - **`routes`** - Router assembly (public vs. token-protected routes)
//! - **`server`** - Configuration, shared state and application startup
//!
//! # Request Flow
//!
//! ```text
//! request -> auth middleware (protected routes) -> handler
//!         -> domain db call (actor id passed explicitly)
//!         -> single conditional UPDATE/INSERT (ownership enforced in SQL)
//! ```

pub mod auth;
pub mod comments;
pub mod error;
pub mod likes;
pub mod middleware;
pub mod posts;
pub mod routes;
pub mod server;
pub mod users;
