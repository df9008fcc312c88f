//! Shared HTTP error envelope and API error type.
//!
//! Every resource module converts its failures into [`ApiError`], which
//! renders the common JSON error envelope.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// JSON error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// The error payload inside the envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error response with the given code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// API error type that converts failures to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String, String),
    PayloadTooLarge(String),
    RateLimited(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new("BAD_REQUEST", msg))
            }
            ApiError::NotFound(resource, id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", format!("{} '{}' not found", resource, id)),
            ),
            ApiError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorResponse::new("PAYLOAD_TOO_LARGE", msg),
            ),
            ApiError::RateLimited(msg) => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new("RATE_LIMITED", msg),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_envelope() {
        let response = ErrorResponse::new("BAD_REQUEST", "message is required");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""code":"BAD_REQUEST""#));
        assert!(json.contains(r#""message":"message is required""#));
    }

    #[test]
    fn not_found_renders_resource_and_id() {
        let response = ApiError::NotFound("Project".to_string(), "abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rate_limited_maps_to_429() {
        let response = ApiError::RateLimited("slow down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn internal_error_hides_details() {
        let response = ApiError::Internal("db exploded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
