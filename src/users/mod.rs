//! Users Module
//!
//! User profiles: the public view of an account. Profile responses never
//! include the password hash; credential material stays inside
//! [`crate::auth::accounts`]. Profile mutation is self-ownership: the only
//! account a caller can update or soft-delete is their own, so the actor id
//! from the middleware doubles as the target id.

pub mod db;
pub mod handlers;

pub use db::UserProfile;
