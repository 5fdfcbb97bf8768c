//! Pastebin API: REST backend for posts and their comments over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Comment, CommentId, Post, PostId};
pub use routes::{api_routes, app, common_routes, HttpLimits};
pub use state::AppState;
pub use store::{CommentRepository, HealthCheck, PgStore, PostRepository};
