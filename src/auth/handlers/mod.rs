//! Authentication Handlers Module
//!
//! HTTP handlers for the unauthenticated boundary:
//!
//! - **`sign_up`** - POST /auth/sign-up - account creation
//! - **`login`** - POST /auth/login - credential verification + token issue
//!
//! Both accept `{ "username": ..., "password": ... }` as JSON. Everything
//! else in the API sits behind the authentication middleware.

pub mod login;
pub mod signup;
pub mod types;

pub use login::login;
pub use signup::sign_up;
pub use types::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse};
