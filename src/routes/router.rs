/**
 * Router Configuration
 *
 * Two route groups share one [`AppState`]:
 *
 * - **Public**: sign-up, login, and the read-only feeds (post list, a
 *   post's comments, like counts)
 * - **Protected**: everything that creates or mutates content, plus the
 *   "my ..." and profile listings; the authentication middleware runs
 *   before any of these handlers and aborts the request on rejection
 *
 * The middleware receives only the token keys as its state - the gate needs
 * nothing else, and keeping its state minimal keeps it testable without a
 * database.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{login, sign_up};
use crate::comments::handlers as comments;
use crate::likes::handlers as likes;
use crate::middleware::auth::auth_middleware;
use crate::posts::handlers as posts;
use crate::server::state::AppState;
use crate::users::handlers as users;

/// Create the router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        // authentication boundary
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/login", post(login))
        // read-only feeds
        .route("/posts/all", get(posts::list_posts))
        .route(
            "/post/comment/by/post/{post_id}",
            get(comments::list_post_comments),
        )
        .route("/like-count/{post_id}", get(likes::get_post_like_count))
        .route(
            "/comment-like/{comment_id}",
            get(likes::get_comment_like_count),
        );

    let protected = Router::new()
        // posts
        .route("/post", post(posts::create_post))
        .route(
            "/post/{post_id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/my/posts", get(posts::list_my_posts))
        .route("/deleted-posts", get(posts::list_deleted_posts))
        // comments (one path registration: create by post id, delete by comment id)
        .route(
            "/comment/{id}",
            post(comments::create_comment).delete(comments::delete_comment),
        )
        .route("/my/comments", get(comments::list_my_comments))
        .route("/comment", put(comments::update_comment))
        // post likes
        .route(
            "/like",
            post(likes::create_post_like).delete(likes::delete_post_like),
        )
        // comment likes
        .route(
            "/comment-like",
            post(likes::create_comment_like).delete(likes::delete_comment_like),
        )
        // user profiles
        .route("/user/{id}", get(users::get_user))
        .route(
            "/user",
            get(users::list_users)
                .put(users::update_me)
                .delete(users::delete_me),
        )
        .route("/deleted-users", get(users::list_deleted_users))
        .route_layer(from_fn_with_state(state.tokens.clone(), auth_middleware));

    public
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
