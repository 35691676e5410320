//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently a single concern:
//!
//! - **`auth`** - the authentication gate that validates bearer tokens and
//!   attaches the decoded identity to the request

pub mod auth;

pub use auth::{auth_middleware, AuthUser, Identity};
