//! Web error types for the Sample Tracker server.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::core::services::ServiceError;
use crate::export::ExportError;
use crate::web::html;

/// Error type for web operations.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request with validation error.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Workbook could not be built.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, Some(msg.clone())),
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            WebError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            WebError::Export(e) => {
                tracing::error!("Export error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = html::render_error(status, details.as_deref());
        (status, Html(body)).into_response()
    }
}

impl From<ServiceError> for WebError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => WebError::NotFound(msg),
            ServiceError::InvalidInput(msg) => WebError::BadRequest(msg),
        }
    }
}
