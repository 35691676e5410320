//! API Error Module
//!
//! This module defines the error taxonomy shared by every HTTP handler and
//! its conversion into JSON error responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `InvalidCredentials` - login/password mismatch, 401 with one uniform
//!   message regardless of which part was wrong
//! - `DuplicateLogin` - sign-up conflict on an active username, 409
//! - `Unauthorized` - missing/invalid/expired token, 401
//! - `NotFoundOrForbidden` - ownership-gated mutation on a record that is
//!   absent or not owned by the caller, 404 (deliberately indistinguishable)
//! - `Validation` - malformed request input, 400
//! - `Internal` - hashing/storage/signing failures unrelated to user input,
//!   500 with an opaque message

pub mod conversion;
pub mod types;

pub use types::ApiError;
