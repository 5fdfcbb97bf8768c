//! HTTP handlers for posts and comments. Each one maps to a single repository call.

pub mod comment;
pub mod post;
pub use comment::*;
pub use post::*;
