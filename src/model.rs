//! Rows, request payloads, and typed identifiers for posts and comments.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Row of the `pastebin` table. Only the key is `NOT NULL` in the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub post_id: i32,
    pub post_title: Option<String>,
    pub post_desc: Option<String>,
}

/// Row of the `comments` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub post_id: Option<i32>,
    pub comment_desc: Option<String>,
}

/// Validated title/description pair used for both insert and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub description: String,
}

/// Validated comment text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentFields {
    pub comment: String,
}

/// Body of `POST /input` and `PUT /post/:id`. Fields are optional here so that
/// a missing one surfaces as a validation error naming it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of `POST /post/:id/comments`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CommentPayload {
    pub comment: Option<String>,
}

/// Ordering for a full post listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostOrder {
    /// Whatever order the database returns.
    Unspecified,
    /// Highest `post_id` first.
    NewestFirst,
}

macro_rules! row_id {
    ($name:ident, $label:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        /// Serial keys start at 1; anything else is rejected before reaching the database.
        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<i32>() {
                    Ok(n) if n > 0 => Ok($name(n)),
                    _ => Err(AppError::BadRequest(format!("invalid {}: '{}'", $label, s))),
                }
            }
        }
    };
}

row_id!(PostId, "post id");
row_id!(CommentId, "comment id");
