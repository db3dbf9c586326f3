use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Error returned by request handlers
#[derive(Debug)]
pub enum WebError {
    /// Malformed or incomplete form input
    BadRequest(String),
    Core(gradebook_core::Error),
}

impl From<gradebook_core::Error> for WebError {
    fn from(e: gradebook_core::Error) -> Self {
        Self::Core(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Core(e) if e.is_input_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Core(e @ gradebook_core::Error::StudentNotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            Self::Core(e) => {
                error!("Request failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, message).into_response()
    }
}
