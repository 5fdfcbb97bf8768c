//! PostgreSQL repositories over a bounded connection pool.

use super::{CommentRepository, HealthCheck, PostRepository};
use crate::config::AppConfig;
use crate::error::{AppError, FOREIGN_KEY_VIOLATION};
use crate::model::{Comment, CommentFields, CommentId, Post, PostFields, PostId, PostOrder};
use crate::sql::{self, Direction, COMMENTS, POSTS};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Every query checks a connection out of the pool for one statement only.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the pool. SSL is off for local development and required (without
    /// certificate verification) otherwise.
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let ssl_mode = if config.local {
            PgSslMode::Disable
        } else {
            PgSslMode::Require
        };
        let options = PgConnectOptions::from_str(&config.database_url)?.ssl_mode(ssl_mode);
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;
        tracing::info!(
            max_connections = config.max_connections,
            ssl = !config.local,
            "database pool ready"
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PostRepository for PgStore {
    async fn list_all(&self, order: PostOrder) -> Result<Vec<Post>, AppError> {
        let q = match order {
            PostOrder::Unspecified => sql::select_all(&POSTS, None),
            PostOrder::NewestFirst => sql::select_all(&POSTS, Some((POSTS.pk, Direction::Desc))),
        };
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, Post>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, AppError> {
        let q = sql::select_by_id(&POSTS);
        tracing::debug!(sql = %q, %id, "query");
        let row = sqlx::query_as::<_, Post>(&q)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, fields: &PostFields) -> Result<Post, AppError> {
        let q = sql::insert(&POSTS, &["post_title", "post_desc"]);
        tracing::debug!(sql = %q, "query");
        let row = sqlx::query_as::<_, Post>(&q)
            .bind(&fields.title)
            .bind(&fields.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: PostId, fields: &PostFields) -> Result<bool, AppError> {
        let q = sql::update(&POSTS, &["post_desc", "post_title"]);
        tracing::debug!(sql = %q, %id, "query");
        let done = sqlx::query(&q)
            .bind(&fields.description)
            .bind(&fields.title)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    async fn delete(&self, id: PostId) -> Result<bool, AppError> {
        let q = sql::delete(&POSTS);
        tracing::debug!(sql = %q, %id, "query");
        let done = sqlx::query(&q)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(AppError::from)
            .map_err(|e| {
                if e.has_db_code(FOREIGN_KEY_VIOLATION) {
                    AppError::Conflict(format!("post {} still has comments", id))
                } else {
                    e
                }
            })?;
        Ok(done.rows_affected() > 0)
    }
}

#[async_trait]
impl CommentRepository for PgStore {
    async fn create(&self, post_id: PostId, fields: &CommentFields) -> Result<Comment, AppError> {
        let q = sql::insert(&COMMENTS, &["post_id", "comment_desc"]);
        tracing::debug!(sql = %q, %post_id, "query");
        let row = sqlx::query_as::<_, Comment>(&q)
            .bind(post_id.get())
            .bind(&fields.comment)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)
            .map_err(|e| {
                if e.has_db_code(FOREIGN_KEY_VIOLATION) {
                    AppError::NotFound(format!("post {}", post_id))
                } else {
                    e
                }
            })?;
        Ok(row)
    }

    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, AppError> {
        let q = sql::select_where(&COMMENTS, "post_id", Some((COMMENTS.pk, Direction::Asc)));
        tracing::debug!(sql = %q, %post_id, "query");
        let rows = sqlx::query_as::<_, Comment>(&q)
            .bind(post_id.get())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn delete(&self, id: CommentId) -> Result<bool, AppError> {
        let q = sql::delete(&COMMENTS);
        tracing::debug!(sql = %q, %id, "query");
        let done = sqlx::query(&q).bind(id.get()).execute(&self.pool).await?;
        Ok(done.rows_affected() > 0)
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
