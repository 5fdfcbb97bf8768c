//! Request extractors whose rejections are [`AppError`](crate::error::AppError)s,
//! so malformed input gets the same structured error body as every other failure.

mod json;
mod path_id;

pub use json::JsonBody;
pub use path_id::PathId;
