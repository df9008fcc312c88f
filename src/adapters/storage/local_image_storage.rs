//! Local filesystem storage adapter - implementation of ImageStorage.
//!
//! Stores uploaded images in a flat directory, served back under a public
//! URL prefix. Uses atomic writes and SHA-256 checksums.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::ports::{ImageStorage, StorageError, StoredImage};

/// File extensions accepted as images.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Local filesystem storage for uploaded images.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{name}`
///
/// This prevents partial files if the process crashes mid-write.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    base_path: PathBuf,
    max_bytes: u64,
    public_prefix: String,
}

impl LocalImageStorage {
    /// Creates storage rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>, max_bytes: u64, public_prefix: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            max_bytes,
            public_prefix: public_prefix.into(),
        }
    }

    /// Creates storage from the upload configuration section.
    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(&config.dir, config.max_bytes, &config.public_prefix)
    }

    /// Extracts and validates the image extension from a filename.
    fn extension_of(filename: &str) -> Result<String, StorageError> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            Ok(ext)
        } else {
            Err(StorageError::UnsupportedExtension(ext))
        }
    }

    /// Resolves a public URL back to the stored file name.
    ///
    /// Rejects anything that could escape the storage directory.
    fn stored_name(&self, public_url: &str) -> Result<String, StorageError> {
        let name = public_url
            .strip_prefix(&self.public_prefix)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(public_url);
        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(StorageError::NotFound(public_url.to_string()));
        }
        Ok(name.to_string())
    }

    /// Computes the hex-encoded SHA-256 checksum of the content.
    fn compute_checksum(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<StoredImage, StorageError> {
        let size = bytes.len() as u64;
        if size > self.max_bytes {
            return Err(StorageError::FileTooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let ext = Self::extension_of(filename)?;
        let stored_name = format!("{}.{}", Uuid::new_v4(), ext);

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create upload directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let final_path = self.base_path.join(&stored_name);
        let temp_path = self.base_path.join(format!("{}.tmp", stored_name));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!("Failed to create temp file {}: {}", temp_path.display(), e))
        })?;
        file.write_all(bytes)
            .await
            .map_err(|e| StorageError::io(format!("Failed to write upload: {}", e)))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::io(format!("Failed to sync upload: {}", e)))?;
        drop(file);

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!("Failed to finalize upload {}: {}", final_path.display(), e))
        })?;

        Ok(StoredImage {
            path: final_path,
            public_url: format!("{}/{}", self.public_prefix, stored_name),
            size_bytes: size,
            checksum: Self::compute_checksum(bytes),
        })
    }

    async fn read(&self, public_url: &str) -> Result<Vec<u8>, StorageError> {
        let name = self.stored_name(public_url)?;
        let path = self.base_path.join(name);
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(public_url.to_string()))
            }
            Err(e) => Err(StorageError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn delete(&self, public_url: &str) -> Result<(), StorageError> {
        let name = self.stored_name(public_url)?;
        let path = self.base_path.join(name);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(public_url.to_string()))
            }
            Err(e) => Err(StorageError::io(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> LocalImageStorage {
        LocalImageStorage::new(dir.path(), 1024, "/uploads")
    }

    #[tokio::test]
    async fn store_and_read_roundtrips_bytes() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let stored = storage.store("room.png", b"png-bytes").await.unwrap();
        assert!(stored.public_url.starts_with("/uploads/"));
        assert!(stored.public_url.ends_with(".png"));
        assert_eq!(stored.size_bytes, 9);

        let bytes = storage.read(&stored.public_url).await.unwrap();
        assert_eq!(bytes, b"png-bytes");
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(dir.path(), 4, "/uploads");

        let result = storage.store("room.png", b"too large").await;
        assert!(matches!(result, Err(StorageError::FileTooLarge { .. })));
    }

    #[tokio::test]
    async fn non_image_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let result = storage.store("script.sh", b"#!/bin/sh").await;
        assert!(matches!(result, Err(StorageError::UnsupportedExtension(_))));
    }

    #[tokio::test]
    async fn extension_check_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        assert!(storage.store("photo.JPG", b"jpeg").await.is_ok());
    }

    #[tokio::test]
    async fn checksum_is_stable_for_same_content() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let first = storage.store("a.png", b"same").await.unwrap();
        let second = storage.store("b.png", b"same").await.unwrap();
        assert_eq!(first.checksum, second.checksum);
        assert_ne!(first.public_url, second.public_url);
    }

    #[tokio::test]
    async fn read_missing_image_is_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let result = storage.read("/uploads/nothing.png").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn path_traversal_is_rejected() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let result = storage.read("/uploads/../secrets.txt").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_image() {
        let dir = TempDir::new().unwrap();
        let storage = storage(&dir);

        let stored = storage.store("room.png", b"bytes").await.unwrap();
        storage.delete(&stored.public_url).await.unwrap();
        assert!(storage.read(&stored.public_url).await.is_err());
    }
}
