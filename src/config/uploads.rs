//! Upload storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Directory where uploaded images are stored
    #[serde(default = "default_upload_dir")]
    pub dir: String,

    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,

    /// Public URL prefix uploads are served under
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl UploadConfig {
    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.is_empty() {
            return Err(ValidationError::MissingUploadDir);
        }
        if self.max_bytes < 1024 || self.max_bytes > 50 * 1024 * 1024 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_bytes: default_max_bytes(),
            public_prefix: default_public_prefix(),
        }
    }
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.dir, "./uploads");
        assert_eq!(config.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.public_prefix, "/uploads");
    }

    #[test]
    fn test_validation_empty_dir() {
        let config = UploadConfig {
            dir: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_limit_bounds() {
        let config = UploadConfig {
            max_bytes: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = UploadConfig {
            max_bytes: 500 * 1024 * 1024,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(UploadConfig::default().validate().is_ok());
    }
}
