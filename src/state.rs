//! Shared application state for all routes. Holds repositories only; no entity data.

use crate::store::{CommentRepository, HealthCheck, PgStore, PostRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// All three capabilities served by one PostgreSQL pool.
    pub fn from_store(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            posts: store.clone(),
            comments: store.clone(),
            health: store,
        }
    }
}
