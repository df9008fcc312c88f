//! HTTP handlers for image uploads.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::ports::{ImageStorage, RateLimiter, StorageError};

use super::super::error::ApiError;

/// Shared application state for upload handlers.
#[derive(Clone)]
pub struct UploadAppState {
    pub storage: Arc<dyn ImageStorage>,
    /// Optional rate limiter for throttling uploads.
    pub rate_limiter: Option<Arc<dyn RateLimiter>>,
}

impl UploadAppState {
    /// Creates a new UploadAppState.
    pub fn new(storage: Arc<dyn ImageStorage>) -> Self {
        Self {
            storage,
            rate_limiter: None,
        }
    }

    /// Attaches a rate limiter.
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }
}

/// Response body for a successful upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub size_bytes: u64,
    pub checksum: String,
}

/// POST /api/uploads - Store an uploaded image.
///
/// Accepts the first multipart field carrying a filename.
///
/// # Errors
/// - 400 Bad Request: no file field, unsupported extension
/// - 413 Payload Too Large: file exceeds the configured limit
/// - 429 Too Many Requests: rate limit exceeded
pub async fn upload_image(
    State(state): State<UploadAppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(ref rate_limiter) = state.rate_limiter {
        if !rate_limiter.check_rate_limit("uploads").await {
            return Err(ApiError::RateLimited(
                "Too many uploads. Please wait before trying again.".to_string(),
            ));
        }
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|name| name.to_string()) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

        let stored = state
            .storage
            .store(&filename, &bytes)
            .await
            .map_err(|e| match e {
                StorageError::FileTooLarge { .. } => ApiError::PayloadTooLarge(e.to_string()),
                StorageError::UnsupportedExtension(_) => ApiError::BadRequest(e.to_string()),
                other => ApiError::Internal(other.to_string()),
            })?;

        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                url: stored.public_url,
                size_bytes: stored.size_bytes,
                checksum: stored.checksum,
            }),
        ));
    }

    Err(ApiError::BadRequest(
        "No file field found in upload".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StoredImage;
    use async_trait::async_trait;

    /// Storage stub that accepts everything.
    struct StubStorage;

    #[async_trait]
    impl ImageStorage for StubStorage {
        async fn store(&self, filename: &str, bytes: &[u8]) -> Result<StoredImage, StorageError> {
            Ok(StoredImage {
                path: filename.into(),
                public_url: format!("/uploads/{}", filename),
                size_bytes: bytes.len() as u64,
                checksum: "stub".to_string(),
            })
        }

        async fn read(&self, _public_url: &str) -> Result<Vec<u8>, StorageError> {
            Ok(vec![])
        }

        async fn delete(&self, _public_url: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn upload_state_accepts_rate_limiter() {
        use crate::adapters::rate_limiter::InMemoryRateLimiter;
        let state = UploadAppState::new(Arc::new(StubStorage))
            .with_rate_limiter(Arc::new(InMemoryRateLimiter::with_defaults()));
        assert!(state.rate_limiter.is_some());
    }

    #[test]
    fn upload_response_serializes_camel_case() {
        let response = UploadResponse {
            url: "/uploads/a.png".to_string(),
            size_bytes: 9,
            checksum: "abc".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""sizeBytes":9"#));
    }
}
