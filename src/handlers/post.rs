//! Post handlers: list, list newest first, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::model::{PostId, PostOrder, PostPayload};
use crate::response::{message, success_ok, POST_DELETED, POST_UPDATED};
use crate::state::AppState;
use crate::validation::RequestValidator;
use axum::{extract::State, response::IntoResponse};

pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.posts.list_all(PostOrder::Unspecified).await?;
    Ok(success_ok(rows))
}

pub async fn view_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.posts.list_all(PostOrder::NewestFirst).await?;
    Ok(success_ok(rows))
}

pub async fn read_post(
    State(state): State<AppState>,
    PathId(id): PathId<PostId>,
) -> Result<impl IntoResponse, AppError> {
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;
    Ok(success_ok(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PostPayload>,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::post(body)?;
    let post = state.posts.create(&fields).await?;
    tracing::info!(post_id = post.post_id, "post created");
    Ok(success_ok(post))
}

pub async fn update_post(
    State(state): State<AppState>,
    PathId(id): PathId<PostId>,
    JsonBody(body): JsonBody<PostPayload>,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::post(body)?;
    if !state.posts.update(id, &fields).await? {
        return Err(AppError::NotFound(format!("post {}", id)));
    }
    Ok(message(POST_UPDATED))
}

pub async fn delete_post(
    State(state): State<AppState>,
    PathId(id): PathId<PostId>,
) -> Result<impl IntoResponse, AppError> {
    if !state.posts.delete(id).await? {
        return Err(AppError::NotFound(format!("post {}", id)));
    }
    tracing::info!(post_id = id.get(), "post deleted");
    Ok(message(POST_DELETED))
}
