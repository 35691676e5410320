//! Request helpers for router-level tests
//!
//! Every helper drives the real router through `tower::ServiceExt::oneshot`,
//! so requests cross the same middleware and extractors as in production.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use socialnet::auth::tokens::TokenKeys;
use socialnet::routes::create_router;
use socialnet::server::state::AppState;

const SECRET: &str = "integration-test-secret";

// low cost keeps the hashing in sign-up/login tests fast
const BCRYPT_COST: u32 = 4;

/// Assemble the full router over a live pool
pub fn test_app(pool: PgPool) -> Router {
    create_router(AppState {
        pool,
        tokens: Arc::new(TokenKeys::new(SECRET, 3600)),
        bcrypt_cost: BCRYPT_COST,
    })
}

/// Send one request through the router
///
/// `token` goes into the `Authorization` header as-is; `body` is serialized
/// as JSON when present.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body back as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A username that cannot collide across concurrently running tests
pub fn unique_username(prefix: &str) -> String {
    let tag = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{}", &tag[..8])
}

/// Sign up a fresh account and log it in, returning (username, token)
pub async fn sign_up_and_login(app: &Router, prefix: &str, password: &str) -> (String, String) {
    let username = unique_username(prefix);

    let response = send(
        app,
        "POST",
        "/auth/sign-up",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201, "sign-up failed");

    let token = login(app, &username, password).await;
    (username, token)
}

/// Log an existing account in and return the issued token
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200, "login failed");

    let json = body_json(response).await;
    json["token"].as_str().expect("login returns a token").to_string()
}

/// Create a post as `token`, returning its id
pub async fn create_post(app: &Router, token: &str, description: &str) -> Uuid {
    let response = send(
        app,
        "POST",
        "/post",
        Some(token),
        Some(serde_json::json!({ "description": description })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 201, "post creation failed");

    let json = body_json(response).await;
    json["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("post creation returns an id")
}
