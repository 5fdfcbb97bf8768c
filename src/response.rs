//! Success response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const POST_DELETED: &str = "Post has been deleted.";
pub const POST_UPDATED: &str = "Post was updated.";
pub const COMMENT_DELETED: &str = "Comment has been deleted.";

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Confirmation encoded as a bare JSON string.
pub fn message(text: &'static str) -> (StatusCode, Json<&'static str>) {
    (StatusCode::OK, Json(text))
}

/// `201` with `{"status":"success"}`.
pub fn created() -> (StatusCode, Json<StatusBody>) {
    (StatusCode::CREATED, Json(StatusBody { status: "success" }))
}
