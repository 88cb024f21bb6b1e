//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to an HTTP status code and a flat JSON error body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::PostId;

/// JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "All data fields must be provided" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant             | HTTP Status               |
/// |---------------------|---------------------------|
/// | `MissingFields`     | 400 Bad Request           |
/// | `PostNotFound`      | 400 Bad Request           |
/// | `InvalidRequest`    | 400 Bad Request           |
/// | `CapacityExhausted` | 507 Insufficient Storage  |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Create request lacked `title` or `content`.
    #[error("All data fields must be provided")]
    MissingFields,

    /// No post with the given id exists.
    #[error("Post with id: {0} could not be found")]
    PostNotFound(PostId),

    /// Body or query parameters could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Every id below the allocation limit is in use.
    #[error("no free post id below {limit}")]
    CapacityExhausted {
        /// Exclusive upper bound of the id search.
        limit: u64,
    },
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields | Self::PostNotFound(_) | Self::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::CapacityExhausted { .. } => StatusCode::INSUFFICIENT_STORAGE,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
