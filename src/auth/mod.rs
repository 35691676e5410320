//! Authentication Module
//!
//! This module handles user registration, login and the credential/token
//! primitives both are built on.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── password.rs     - bcrypt hashing and verification
//! ├── tokens.rs       - JWT issuance and validation
//! ├── accounts.rs     - Account store (credential rows)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - POST /auth/sign-up
//!     └── login.rs    - POST /auth/login
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign-up**: username + password → password hashed → account row
//!    created (typed conflict on duplicate username)
//! 2. **Login**: username resolved to the stored credential → password
//!    verified → signed time-limited token returned
//! 3. **Protected request**: bare token in the `Authorization` header →
//!    verified by the middleware gate → identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Tokens are HS256-signed with a process-wide secret loaded once at
//!   startup; expiry is strict (`now < exp`, zero leeway)
//! - Invalid credentials return one uniform 401 message (no enumeration)

pub mod accounts;
pub mod handlers;
pub mod password;
pub mod tokens;

pub use handlers::types::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse};
pub use handlers::{login, sign_up};
pub use tokens::{Claims, TokenError, TokenKeys};
