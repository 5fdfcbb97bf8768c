//! Comment handlers: create under a post, list by post, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::model::{CommentId, CommentPayload, PostId};
use crate::response::{created, message, success_ok, COMMENT_DELETED};
use crate::state::AppState;
use crate::validation::RequestValidator;
use axum::{extract::State, response::IntoResponse};

pub async fn create_comment(
    State(state): State<AppState>,
    PathId(post_id): PathId<PostId>,
    JsonBody(body): JsonBody<CommentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::comment(body)?;
    let comment = state.comments.create(post_id, &fields).await?;
    tracing::info!(comment_id = comment.comment_id, post_id = post_id.get(), "comment created");
    Ok(created())
}

pub async fn list_comments(
    State(state): State<AppState>,
    PathId(post_id): PathId<PostId>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.comments.list_by_post(post_id).await?;
    Ok(success_ok(rows))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    PathId(id): PathId<CommentId>,
) -> Result<impl IntoResponse, AppError> {
    if !state.comments.delete(id).await? {
        return Err(AppError::NotFound(format!("comment {}", id)));
    }
    Ok(message(COMMENT_DELETED))
}
