/**
 * API Error Types
 *
 * This module defines the error enum returned by HTTP handlers. Each variant
 * maps to a fixed HTTP status code and a user-facing message.
 *
 * # Information Leakage
 *
 * Several variants deliberately collapse distinct internal causes into one
 * client-visible shape:
 *
 * - `InvalidCredentials` does not reveal whether the username or the
 *   password was wrong.
 * - `NotFoundOrForbidden` does not reveal whether a record exists but is
 *   owned by someone else.
 * - `Internal` never carries the underlying error text to the client; the
 *   cause is logged server-side with context instead.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by HTTP handlers
///
/// Every handler returns `Result<_, ApiError>`; the `IntoResponse`
/// implementation in [`crate::error::conversion`] turns a variant into a JSON
/// body with the status code from [`ApiError::status_code`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login failed: unknown username or wrong password.
    ///
    /// The message is identical for both causes so the endpoint cannot be
    /// used to enumerate registered usernames.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Sign-up conflict: the username is already taken by an active account.
    #[error("username is already used, enter another one")]
    DuplicateLogin,

    /// Missing, malformed, expired or wrongly-signed token.
    #[error("{message}")]
    Unauthorized {
        /// Gate-state message ("token not found" / "invalid token")
        message: String,
    },

    /// Ownership-gated mutation hit zero rows: the record does not exist,
    /// is already soft-deleted, or belongs to another identity.
    #[error("record not found")]
    NotFoundOrForbidden,

    /// Request input failed validation.
    #[error("{message}")]
    Validation {
        /// Human-readable description of the rejected field
        message: String,
    },

    /// Server-side failure unrelated to user input.
    ///
    /// The stored message is for logs only; clients receive an opaque
    /// "internal server error" body.
    #[error("internal error: {message}")]
    Internal {
        /// Context for the log line, never shown to the client
        message: String,
    },
}

impl ApiError {
    /// Create an `Unauthorized` error with a gate-state message
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a `Validation` error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an `Internal` error; the message is logged, not returned
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DuplicateLogin => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFoundOrForbidden => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message included in the JSON response body
    ///
    /// Internal errors are replaced with an opaque message here; the real
    /// cause has already been logged at the point the error was constructed.
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal { .. } => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    /// Storage errors are logged with context and returned as opaque 500s
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {err:?}");
        Self::internal(format!("database error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::DuplicateLogin.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::unauthorized("token not found").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFoundOrForbidden.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::validation("bad field").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_opaque() {
        let err = ApiError::internal("connection refused to 10.0.0.5");
        assert_eq!(err.client_message(), "internal server error");
        // the real cause is still available for logging
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_unauthorized_carries_gate_message() {
        let err = ApiError::unauthorized("token not found");
        assert_eq!(err.client_message(), "token not found");
    }

    #[test]
    fn test_not_found_or_forbidden_is_neutral() {
        // one message for both "absent" and "not yours"
        assert_eq!(
            ApiError::NotFoundOrForbidden.client_message(),
            "record not found"
        );
    }
}
