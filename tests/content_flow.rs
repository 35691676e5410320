//! Storage-backed tests for the ownership contract and account flows.
//!
//! These run the full stack against a live Postgres named by
//! `TEST_DATABASE_URL` and skip silently when it is unset. Each test signs
//! up its own identities, so the suite needs no table truncation and runs
//! in parallel safely.

mod common;

use common::auth_helpers::{
    body_json, create_post, login, send, sign_up_and_login, test_app, unique_username,
};
use common::database::TestDatabase;

#[tokio::test]
async fn duplicate_sign_up_is_a_conflict() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());
    let username = unique_username("ann");

    let first = send(
        &app,
        "POST",
        "/auth/sign-up",
        None,
        Some(serde_json::json!({ "username": username, "password": "s3cret" })),
    )
    .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = send(
        &app,
        "POST",
        "/auth/sign-up",
        None,
        Some(serde_json::json!({ "username": username, "password": "other" })),
    )
    .await;
    assert_eq!(second.status().as_u16(), 409);
    assert_eq!(body_json(second).await["error"], "username already exists");
}

#[tokio::test]
async fn cross_user_delete_leaves_the_post_intact() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());

    let (_, owner) = sign_up_and_login(&app, "ann", "s3cret").await;
    let (_, other) = sign_up_and_login(&app, "bob", "s3cret").await;
    let post_id = create_post(&app, &owner, "mine").await;

    // someone else's delete looks exactly like a missing post
    let foreign = send(&app, "DELETE", &format!("/post/{post_id}"), Some(&other), None).await;
    assert_eq!(foreign.status().as_u16(), 404);

    // and left the post untouched
    let read = send(&app, "GET", &format!("/post/{post_id}"), Some(&owner), None).await;
    assert_eq!(read.status().as_u16(), 200);

    // the owner's delete succeeds once, then reports not-found like any
    // other miss
    let own = send(&app, "DELETE", &format!("/post/{post_id}"), Some(&owner), None).await;
    assert_eq!(own.status().as_u16(), 200);

    let again = send(&app, "DELETE", &format!("/post/{post_id}"), Some(&owner), None).await;
    assert_eq!(again.status().as_u16(), 404);
}

#[tokio::test]
async fn rejected_password_update_rolls_back_the_rename() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());

    let (username, token) = sign_up_and_login(&app, "ann", "s3cret").await;
    let new_name = unique_username("renamed");
    let oversized = "x".repeat(73);

    let response = send(
        &app,
        "PUT",
        "/user",
        Some(&token),
        Some(serde_json::json!({ "username": new_name, "password": oversized })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);

    // nothing was written: the old name still logs in, the new one does not
    login(&app, &username, "s3cret").await;

    let stale = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "username": new_name, "password": "s3cret" })),
    )
    .await;
    assert_eq!(stale.status().as_u16(), 401);
}

#[tokio::test]
async fn profile_update_applies_both_fields_together() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());

    let (old_name, token) = sign_up_and_login(&app, "ann", "s3cret").await;
    let new_name = unique_username("renamed");

    let response = send(
        &app,
        "PUT",
        "/user",
        Some(&token),
        Some(serde_json::json!({ "username": new_name, "password": "n3w-pass" })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    login(&app, &new_name, "n3w-pass").await;

    let stale = send(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "username": old_name, "password": "s3cret" })),
    )
    .await;
    assert_eq!(stale.status().as_u16(), 401);
}

#[tokio::test]
async fn repeated_like_reports_already_liked() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());

    let (_, owner) = sign_up_and_login(&app, "ann", "s3cret").await;
    let (_, liker) = sign_up_and_login(&app, "bob", "s3cret").await;
    let post_id = create_post(&app, &owner, "likeable").await;
    let body = serde_json::json!({ "post_id": post_id });

    let first = send(&app, "POST", "/like", Some(&liker), Some(body.clone())).await;
    assert_eq!(first.status().as_u16(), 201);
    assert_eq!(body_json(first).await["message"], "liked");

    let second = send(&app, "POST", "/like", Some(&liker), Some(body)).await;
    assert_eq!(second.status().as_u16(), 201);
    assert_eq!(body_json(second).await["message"], "already liked");

    let count = send(&app, "GET", &format!("/like-count/{post_id}"), None, None).await;
    assert_eq!(body_json(count).await["count"], 1);
}

#[tokio::test]
async fn simultaneous_likes_never_error() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());

    let (_, owner) = sign_up_and_login(&app, "ann", "s3cret").await;
    let (_, liker) = sign_up_and_login(&app, "bob", "s3cret").await;
    let post_id = create_post(&app, &owner, "contended").await;
    let body = serde_json::json!({ "post_id": post_id });

    // both land at once; one inserts, the other loses the index race and
    // must still come back as an idempotent success
    let (a, b) = tokio::join!(
        send(&app, "POST", "/like", Some(&liker), Some(body.clone())),
        send(&app, "POST", "/like", Some(&liker), Some(body.clone())),
    );
    assert_eq!(a.status().as_u16(), 201);
    assert_eq!(b.status().as_u16(), 201);

    let count = send(&app, "GET", &format!("/like-count/{post_id}"), None, None).await;
    assert_eq!(body_json(count).await["count"], 1);
}

#[tokio::test]
async fn comment_on_a_deleted_post_is_not_found() {
    let Some(db) = TestDatabase::connect().await else {
        return;
    };
    let app = test_app(db.pool().clone());

    let (_, owner) = sign_up_and_login(&app, "ann", "s3cret").await;
    let (_, commenter) = sign_up_and_login(&app, "bob", "s3cret").await;
    let post_id = create_post(&app, &owner, "short-lived").await;

    let deleted = send(&app, "DELETE", &format!("/post/{post_id}"), Some(&owner), None).await;
    assert_eq!(deleted.status().as_u16(), 200);

    let response = send(
        &app,
        "POST",
        &format!("/comment/{post_id}"),
        Some(&commenter),
        Some(serde_json::json!({ "comment": "too late" })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 404);

    // nothing slipped in under the delete
    let listing = send(
        &app,
        "GET",
        &format!("/post/comment/by/post/{post_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(body_json(listing).await["count"], 0);
}
