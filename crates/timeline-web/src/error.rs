//! Error types for the site and its JSON API.
//!
//! [`SiteError`] is converted into a `{error, status}` JSON response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. HTML pages
//! never surface chat failures this way; they render them inline.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use timeline_chat::ChatError;
use timeline_core::QueryError;

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An invalid query parameter was provided.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The chat gateway could not answer.
    #[error(transparent)]
    Chat(#[from] ChatError),

    /// A page template failed to load or render.
    #[error("template error: {0}")]
    Template(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<QueryError> for SiteError {
    fn from(e: QueryError) -> Self {
        Self::InvalidQuery(e.to_string())
    }
}

impl SiteError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidQuery(_) | Self::Chat(ChatError::EmptyQuestion) => {
                StatusCode::BAD_REQUEST
            }
            Self::Chat(ChatError::Configuration(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Chat(ChatError::Gateway(_)) => StatusCode::BAD_GATEWAY,
            Self::Template(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(msg) | Self::InvalidQuery(msg) => msg.clone(),
            Self::Chat(e) => e.user_message(),
            Self::Template(msg) => {
                tracing::error!(error = %msg, "template failure");
                String::from("page rendering failed")
            }
            Self::Serialization(e) => format!("JSON error: {e}"),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
