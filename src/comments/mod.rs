//! Comments Module
//!
//! Comments on posts. Like posts, comments are ownable records: every
//! mutation path, deletion included, is scoped to the creating identity
//! inside a single conditional UPDATE.

pub mod db;
pub mod handlers;

pub use db::Comment;
