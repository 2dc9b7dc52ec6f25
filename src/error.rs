//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "persona not found: 999999",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ServiceError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Server / Store  | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No persona with the given identifier exists in the store.
    #[error("persona not found: {0}")]
    PersonaNotFound(i32),

    /// Update patch carried no fields.
    #[error("no data to update")]
    EmptyPatch,

    /// The store is unreachable or rejected the credentials.
    #[error("database connection failed: {0}")]
    Connection(String),

    /// A statement failed at the store; the transaction was rolled back.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::EmptyPatch => 1001,
            Self::PersonaNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::Persistence(_) => 3001,
            Self::Connection(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyPatch => StatusCode::BAD_REQUEST,
            Self::PersonaNotFound(_) => StatusCode::NOT_FOUND,
            Self::Connection(_) | Self::Persistence(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ServiceError::PersonaNotFound(999_999);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.to_string(), "persona not found: 999999");
    }

    #[test]
    fn empty_patch_maps_to_400() {
        let err = ServiceError::EmptyPatch;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
        assert_eq!(err.to_string(), "no data to update");
    }

    #[test]
    fn store_failures_map_to_500() {
        let connection = ServiceError::Connection("refused".to_string());
        let persistence = ServiceError::Persistence("syntax".to_string());
        let internal = ServiceError::Internal("boom".to_string());

        for err in [&connection, &persistence, &internal] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
        assert_eq!(connection.error_code(), 3002);
        assert_eq!(persistence.error_code(), 3001);
        assert_eq!(internal.error_code(), 3000);
    }

    #[test]
    fn error_body_omits_absent_details() {
        let body = ErrorResponse {
            error: ErrorBody {
                code: 1001,
                message: "no data to update".to_string(),
                details: None,
            },
        };
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json["error"]["code"], 1001);
        assert_eq!(json["error"]["message"], "no data to update");
        assert!(json["error"].get("details").is_none());
    }
}
