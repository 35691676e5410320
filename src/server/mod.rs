//! Server Module
//!
//! Configuration loading, shared application state and startup wiring.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Typed configuration loaded once from the environment
//! ├── state.rs  - AppState shared across handlers
//! └── init.rs   - Pool creation, migrations, router assembly
//! ```

pub mod config;
pub mod init;
pub mod state;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
