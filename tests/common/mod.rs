//! Common test utilities
//!
//! - Database fixture (connects and migrates, skips without a configured URL)
//! - Request helpers for driving the assembled router

pub mod auth_helpers;
pub mod database;
