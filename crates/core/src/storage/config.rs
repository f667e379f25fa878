//! Artifact store configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where exported artifacts are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// Local filesystem directory.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
    /// Process memory. Contents vanish with the process.
    Memory,
}

impl StorageProvider {
    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocalFs { .. } => "local",
            Self::Memory => "memory",
        }
    }
}

/// Artifact store configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Maximum artifact size in bytes.
    pub max_artifact_size: u64,
    /// Content types the store accepts.
    pub allowed_content_types: Vec<String>,
}

impl StorageConfig {
    /// Default max artifact size: 50MB.
    pub const DEFAULT_MAX_ARTIFACT_SIZE: u64 = 50 * 1024 * 1024;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            max_artifact_size: Self::DEFAULT_MAX_ARTIFACT_SIZE,
            allowed_content_types: vec!["application/pdf".to_string()],
        }
    }

    /// Set maximum artifact size.
    #[must_use]
    pub fn with_max_artifact_size(mut self, size: u64) -> Self {
        self.max_artifact_size = size;
        self
    }

    /// Check if a content type is accepted.
    #[must_use]
    pub fn is_content_type_allowed(&self, content_type: &str) -> bool {
        self.allowed_content_types.iter().any(|t| t == content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_provider_names() {
        assert_eq!(StorageProvider::local_fs("./reports").name(), "local");
        assert_eq!(StorageProvider::Memory.name(), "memory");
    }

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::new(StorageProvider::Memory);
        assert_eq!(
            config.max_artifact_size,
            StorageConfig::DEFAULT_MAX_ARTIFACT_SIZE
        );
        assert!(config.is_content_type_allowed("application/pdf"));
        assert!(!config.is_content_type_allowed("text/html"));
    }
}
