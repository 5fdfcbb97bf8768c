//! Request validation: required fields present and non-null.

use crate::error::AppError;
use crate::model::{CommentFields, CommentPayload, PostFields, PostPayload};

pub struct RequestValidator;

impl RequestValidator {
    /// Both `title` and `description` must be present. Empty strings are accepted.
    pub fn post(payload: PostPayload) -> Result<PostFields, AppError> {
        let title = required("title", payload.title)?;
        let description = required("description", payload.description)?;
        Ok(PostFields { title, description })
    }

    pub fn comment(payload: CommentPayload) -> Result<CommentFields, AppError> {
        let comment = required("comment", payload.comment)?;
        Ok(CommentFields { comment })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_requires_both_fields() {
        let err = RequestValidator::post(PostPayload {
            title: Some("t".into()),
            description: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "validation: description is required");

        let err = RequestValidator::post(PostPayload::default()).unwrap_err();
        assert_eq!(err.to_string(), "validation: title is required");
    }

    #[test]
    fn empty_strings_pass() {
        let fields = RequestValidator::post(PostPayload {
            title: Some(String::new()),
            description: Some(String::new()),
        })
        .unwrap();
        assert!(fields.title.is_empty() && fields.description.is_empty());
    }

    #[test]
    fn comment_requires_text() {
        assert!(matches!(
            RequestValidator::comment(CommentPayload::default()),
            Err(AppError::Validation(_))
        ));
        let ok = RequestValidator::comment(CommentPayload {
            comment: Some("nice".into()),
        })
        .unwrap();
        assert_eq!(ok.comment, "nice");
    }
}
