//! Repository traits for posts and comments. Handlers depend on these, never on SQL.

mod postgres;

pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Comment, CommentFields, CommentId, Post, PostFields, PostId, PostOrder};
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list_all(&self, order: PostOrder) -> Result<Vec<Post>, AppError>;

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, AppError>;

    async fn create(&self, fields: &PostFields) -> Result<Post, AppError>;

    /// Overwrites title and description. Returns false when no row has this id.
    async fn update(&self, id: PostId, fields: &PostFields) -> Result<bool, AppError>;

    /// Returns false when no row has this id. Fails with [`AppError::Conflict`]
    /// while comments still reference the post.
    async fn delete(&self, id: PostId) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fails with [`AppError::NotFound`] when the post does not exist.
    async fn create(&self, post_id: PostId, fields: &CommentFields) -> Result<Comment, AppError>;

    /// Comments of one post, oldest first.
    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, AppError>;

    async fn delete(&self, id: CommentId) -> Result<bool, AppError>;
}

/// Readiness probe for the backing store.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
}
