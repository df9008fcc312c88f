//! Image storage port - filesystem operations for uploaded images.
//!
//! The upload handler depends on this trait; adapters (like the local
//! filesystem storage) provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// A stored image and where to find it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    /// Filesystem path the image was written to.
    pub path: PathBuf,
    /// Public URL path clients use to fetch the image.
    pub public_url: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// SHA-256 checksum of the content, hex-encoded.
    pub checksum: String,
}

/// Errors that can occur in image storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The upload exceeds the configured size limit.
    #[error("file too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// The file extension is not an accepted image format.
    #[error("unsupported image extension: {0}")]
    UnsupportedExtension(String),

    /// The requested image does not exist.
    #[error("image not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(String),
}

impl StorageError {
    /// Creates an I/O error from a message.
    pub fn io(message: impl Into<String>) -> Self {
        StorageError::Io(message.into())
    }
}

/// Port for storing and retrieving uploaded images.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content on failure)
/// - Enforce the configured size limit
/// - Accept only image extensions (png, jpg, jpeg, gif, webp)
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store image bytes under a sanitized version of `filename`.
    ///
    /// Returns where the image was written and its public URL.
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<StoredImage, StorageError>;

    /// Read a stored image back by its public URL path.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no such image exists.
    async fn read(&self, public_url: &str) -> Result<Vec<u8>, StorageError>;

    /// Delete a stored image by its public URL path.
    async fn delete(&self, public_url: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn ImageStorage) {}
    }

    #[test]
    fn file_too_large_displays_both_sizes() {
        let err = StorageError::FileTooLarge {
            size: 10,
            limit: 5,
        };
        let text = format!("{}", err);
        assert!(text.contains("10"));
        assert!(text.contains("5"));
    }
}
