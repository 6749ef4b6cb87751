//! Error types for the word service
//!
//! Every failure carries the message that is relayed to callers verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Word Error Enum ==
/// Unified error type for the word service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Existence check failed for a supplied id
    #[error("{0}")]
    NotFound(String),

    /// Underlying store call failed (connectivity, constraint, zero rows affected)
    #[error("{0}")]
    Store(String),

    /// Malformed input rejected before reaching the service
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
}

impl WordError {
    /// Convenience constructor for a single validation message.
    pub fn invalid(message: impl Into<String>) -> Self {
        WordError::Validation(vec![message.into()])
    }

    /// Returns the caller-facing messages for this error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            WordError::NotFound(msg) | WordError::Store(msg) => vec![msg.clone()],
            WordError::Validation(msgs) => msgs.clone(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for WordError {
    fn into_response(self) -> Response {
        let status = match &self {
            WordError::NotFound(_) => StatusCode::NOT_FOUND,
            WordError::Store(_) => StatusCode::BAD_REQUEST,
            WordError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.messages()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the word service.
pub type Result<T> = std::result::Result<T, WordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_relays_message_verbatim() {
        let err = WordError::Store("Failed to delete sql word.".to_string());
        assert_eq!(err.to_string(), "Failed to delete sql word.");
    }

    #[test]
    fn test_validation_messages() {
        let err = WordError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.messages(), vec!["a", "b"]);
        assert_eq!(err.to_string(), "a; b");
    }

    #[test]
    fn test_status_codes() {
        let resp = WordError::NotFound("missing".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = WordError::invalid("bad").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = WordError::Store("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
