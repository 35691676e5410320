//! Posts Module
//!
//! Post records and their HTTP handlers. Posts are ownable records: the
//! creating identity is stamped into `created_by` at insert time and every
//! mutation is scoped to it inside a single conditional UPDATE.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Post model and database operations
//! └── handlers.rs - HTTP handlers
//! ```

pub mod db;
pub mod handlers;

pub use db::Post;
