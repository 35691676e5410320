//! Routes Module
//!
//! Router assembly: the public surface (sign-up, login, read-only feeds)
//! and the token-protected surface behind the authentication middleware.

pub mod router;

pub use router::create_router;
