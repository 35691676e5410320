/**
 * Authentication Handler Types
 *
 * Request and response types for the sign-up and login endpoints.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sign-up request body
#[derive(Debug, Deserialize, Serialize)]
pub struct SignUpRequest {
    /// Desired login name (3-30 chars, letter first, alphanumeric + underscore)
    pub username: String,
    /// Plaintext password (hashed before storage, never logged)
    pub password: String,
}

/// Sign-up response body
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpResponse {
    /// Always "created"
    pub message: String,
    /// Id of the new account
    pub id: Uuid,
}

/// Login request body
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Login response body
///
/// The token is the only field: claims are never re-serialized verbatim to
/// the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,
}
