/**
 * Authentication Middleware
 *
 * The gate in front of every protected route. Per request:
 *
 * 1. No `Authorization` header  -> 401 "token not found"
 * 2. Header present             -> parse via the token codec
 * 3. Parse failure              -> 401 "invalid token"
 * 4. Parse success              -> attach [`Identity`] to request extensions
 *
 * The header value is the bare token - no `Bearer ` scheme prefix. The gate
 * is a pure filter: it never touches the database, never mutates persisted
 * state, and on rejection no downstream handler runs.
 *
 * The two rejection messages are the only externally visible distinction;
 * expired, wrongly-signed and malformed tokens all produce the same
 * "invalid token" response. The precise cause is logged.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::TokenKeys;
use crate::error::ApiError;

/// Authenticated identity decoded from a valid token
///
/// Lives in the request extensions for the duration of one request; no
/// component may persist it beyond that.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Stable account id
    pub id: Uuid,
    /// Login name
    pub username: String,
}

/// Authentication middleware
///
/// Validates the bare token in the `Authorization` header against the
/// process-wide [`TokenKeys`] and seeds the request extensions with the
/// decoded [`Identity`].
///
/// # Errors
///
/// `401 Unauthorized` when the header is missing or the token does not
/// validate. The response shape is identical in both cases apart from the
/// gate-state message.
pub async fn auth_middleware(
    State(keys): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!(path = %request.uri().path(), "missing Authorization header");
            ApiError::unauthorized("token not found")
        })?;

    let claims = keys.parse(token).map_err(|err| {
        // distinguishable in the logs, uniform to the client
        tracing::warn!(path = %request.uri().path(), "token rejected: {err:?}");
        ApiError::unauthorized("invalid token")
    })?;

    let id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("token carries a non-UUID subject");
        ApiError::unauthorized("invalid token")
    })?;

    request.extensions_mut().insert(Identity {
        id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by [`auth_middleware`]
///
/// # Panics vs. 500
///
/// Absence of the identity on a protected route means the route was wired
/// without the middleware - a programming defect, not a user error - so the
/// rejection is a 500, never a 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            tracing::error!(
                path = %parts.uri.path(),
                "protected handler reached without auth middleware"
            );
            ApiError::internal("identity missing from request context")
        })?;

        Ok(AuthUser(identity))
    }
}
