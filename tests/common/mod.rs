//! In-memory repositories and request helpers shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pastebin_api::model::{CommentFields, PostFields, PostOrder};
use pastebin_api::{
    app, AppError, AppState, Comment, CommentId, CommentRepository, HealthCheck, HttpLimits,
    Post, PostId, PostRepository,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

#[derive(Default)]
struct Tables {
    posts: BTreeMap<i32, Post>,
    comments: BTreeMap<i32, Comment>,
    next_post: i32,
    next_comment: i32,
}

/// Behaves like the PostgreSQL schema: serial ids, comments reference posts.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    available: AtomicBool,
    list_delay_ms: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            available: AtomicBool::new(true),
            list_delay_ms: AtomicU64::new(0),
        }
    }
}

impl MemoryStore {
    pub fn set_available(&self, up: bool) {
        self.available.store(up, Ordering::SeqCst);
    }

    /// Make every post listing wait this long before answering.
    pub fn set_list_delay(&self, delay: Duration) {
        self.list_delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Store a row as-is, the way rows written outside this service look.
    pub fn insert_raw_post(&self, post: Post) {
        let mut t = self.tables.lock().unwrap();
        t.next_post = t.next_post.max(post.post_id);
        t.posts.insert(post.post_id, post);
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn list_all(&self, order: PostOrder) -> Result<Vec<Post>, AppError> {
        let delay = self.list_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let t = self.tables.lock().unwrap();
        let mut rows: Vec<Post> = t.posts.values().cloned().collect();
        if order == PostOrder::NewestFirst {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn get_by_id(&self, id: PostId) -> Result<Option<Post>, AppError> {
        Ok(self.tables.lock().unwrap().posts.get(&id.get()).cloned())
    }

    async fn create(&self, fields: &PostFields) -> Result<Post, AppError> {
        let mut t = self.tables.lock().unwrap();
        t.next_post += 1;
        let post = Post {
            post_id: t.next_post,
            post_title: Some(fields.title.clone()),
            post_desc: Some(fields.description.clone()),
        };
        t.posts.insert(post.post_id, post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, fields: &PostFields) -> Result<bool, AppError> {
        let mut t = self.tables.lock().unwrap();
        match t.posts.get_mut(&id.get()) {
            Some(p) => {
                p.post_title = Some(fields.title.clone());
                p.post_desc = Some(fields.description.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: PostId) -> Result<bool, AppError> {
        let mut t = self.tables.lock().unwrap();
        if t.comments.values().any(|c| c.post_id == Some(id.get())) {
            return Err(AppError::Conflict(format!("post {} still has comments", id)));
        }
        Ok(t.posts.remove(&id.get()).is_some())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(&self, post_id: PostId, fields: &CommentFields) -> Result<Comment, AppError> {
        let mut t = self.tables.lock().unwrap();
        if !t.posts.contains_key(&post_id.get()) {
            return Err(AppError::NotFound(format!("post {}", post_id)));
        }
        t.next_comment += 1;
        let comment = Comment {
            comment_id: t.next_comment,
            post_id: Some(post_id.get()),
            comment_desc: Some(fields.comment.clone()),
        };
        t.comments.insert(comment.comment_id, comment.clone());
        Ok(comment)
    }

    async fn list_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, AppError> {
        let t = self.tables.lock().unwrap();
        Ok(t
            .comments
            .values()
            .filter(|c| c.post_id == Some(post_id.get()))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: CommentId) -> Result<bool, AppError> {
        Ok(self.tables.lock().unwrap().comments.remove(&id.get()).is_some())
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::Db(sqlx::Error::PoolClosed))
        }
    }
}

pub fn test_app() -> (Router, Arc<MemoryStore>) {
    test_app_with(HttpLimits::default())
}

pub fn test_app_with(limits: HttpLimits) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        posts: store.clone(),
        comments: store.clone(),
        health: store.clone(),
    };
    (app(state, limits), store)
}

/// Send one request; JSON bodies get a content type and length.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => {
            let bytes = serde_json::to_vec(&v).unwrap();
            builder
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, bytes.len())
                .body(Body::from(bytes))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, req).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

pub async fn create_post(app: &Router, title: &str, description: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/input",
        Some(serde_json::json!({ "title": title, "description": description })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["post_id"].as_i64().unwrap()
}
