//! Post and comment routes.

use crate::handlers::{
    create_comment, create_post, delete_comment, delete_post, list_comments, list_posts,
    read_post, update_post, view_posts,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_posts))
        .route("/viewposts", get(view_posts))
        .route("/input", post(create_post))
        .route(
            "/post/:id",
            get(read_post).put(update_post).delete(delete_post),
        )
        .route("/post/:id/comments", get(list_comments).post(create_comment))
        .route("/comments/:id", delete(delete_comment))
        .with_state(state)
}
