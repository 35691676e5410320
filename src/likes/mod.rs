//! Likes Module
//!
//! Post likes and comment likes. A like is the simplest ownable record:
//! `user_id` is both the payload and the ownership field, so adding is
//! idempotent per (user, target) and removal is always scoped to the
//! caller's own like.

pub mod db;
pub mod handlers;
