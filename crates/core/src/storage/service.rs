//! Artifact store implementation using Apache OpenDAL.

use opendal::{ErrorKind, Operator, services};
use tracing::{info, warn};

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;
use crate::export::Artifact;

/// Where an artifact landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    /// Storage key.
    pub key: String,
    /// Size in bytes.
    pub size: u64,
}

/// Persists exported artifacts.
pub struct ArtifactStore {
    operator: Operator,
    config: StorageConfig,
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("provider", &self.config.provider.name())
            .finish_non_exhaustive()
    }
}

impl ArtifactStore {
    /// Create a store from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create a store with default limits for a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: StorageProvider) -> Result<Self, StorageError> {
        Self::from_config(StorageConfig::new(provider))
    }

    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish()
                    .pipe(Ok)
            }
            StorageProvider::Memory => Operator::new(services::Memory::default())
                .map_err(|e| StorageError::configuration(e.to_string()))?
                .finish()
                .pipe(Ok),
        }
    }

    /// Validate an artifact against config constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the size or content type is not accepted.
    pub fn validate(&self, artifact: &Artifact) -> Result<(), StorageError> {
        let size = artifact.size();
        if size > self.config.max_artifact_size {
            return Err(StorageError::ArtifactTooLarge {
                size,
                max: self.config.max_artifact_size,
            });
        }

        if !self.config.is_content_type_allowed(&artifact.content_type) {
            return Err(StorageError::InvalidContentType {
                content_type: artifact.content_type.clone(),
            });
        }

        Ok(())
    }

    /// Storage key for an artifact filename.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` when nothing usable is left after sanitizing.
    pub fn storage_key(filename: &str) -> Result<String, StorageError> {
        let key = sanitize_filename(filename);
        if key.trim_matches(['.', '_']).is_empty() {
            return Err(StorageError::InvalidKey(filename.to_string()));
        }
        Ok(key)
    }

    /// Write an artifact in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if validation or the write fails. After a failed write
    /// the key is removed best-effort.
    pub async fn save(&self, artifact: &Artifact) -> Result<StoredArtifact, StorageError> {
        self.validate(artifact)?;
        let key = Self::storage_key(&artifact.filename)?;

        if let Err(e) = self.operator.write(&key, artifact.bytes.clone()).await {
            if let Err(cleanup) = self.operator.delete(&key).await {
                warn!(key = %key, error = %cleanup, "Failed to remove partial artifact");
            }
            return Err(StorageError::from(e));
        }

        info!(
            key = %key,
            size = artifact.size(),
            provider = self.provider_name(),
            "Artifact stored"
        );
        Ok(StoredArtifact {
            key,
            size: artifact.size(),
        })
    }

    /// Read a stored artifact's bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the key does not exist.
    pub async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self.operator.read(key).await {
            Ok(buffer) => Ok(buffer.to_vec()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::not_found(key)),
            Err(e) => Err(StorageError::from(e)),
        }
    }

    /// Delete an artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.operator.delete(key).await.map_err(StorageError::from)
    }

    /// Check if an artifact exists.
    pub async fn exists(&self, key: &str) -> bool {
        self.operator.stat(key).await.is_ok()
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }
}

/// Keeps ASCII alphanumerics, dots, hyphens and underscores; everything else becomes `_`.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Extension trait for pipe operator.
trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(filename: &str, bytes: &[u8]) -> Artifact {
        Artifact::pdf(filename, bytes.to_vec())
    }

    fn memory_store() -> ArtifactStore {
        ArtifactStore::from_provider(StorageProvider::Memory).expect("memory store")
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("simulacion-credito-ana-2026-03-09.pdf"),
            "simulacion-credito-ana-2026-03-09.pdf"
        );
        assert_eq!(sanitize_filename("a/../b.pdf"), "a_.._b.pdf");
    }

    #[test]
    fn test_storage_key_rejects_empty() {
        assert!(matches!(
            ArtifactStore::storage_key("///"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(ArtifactStore::storage_key("").is_err());
    }

    #[test]
    fn test_validate_size_and_type() {
        let config =
            StorageConfig::new(StorageProvider::Memory).with_max_artifact_size(4);
        let store = ArtifactStore::from_config(config).expect("memory store");

        assert!(store.validate(&pdf("a.pdf", b"1234")).is_ok());
        assert!(matches!(
            store.validate(&pdf("a.pdf", b"12345")),
            Err(StorageError::ArtifactTooLarge { size: 5, max: 4 })
        ));

        let html = Artifact {
            content_type: "text/html".to_string(),
            ..pdf("a.html", b"x")
        };
        assert!(matches!(
            store.validate(&html),
            Err(StorageError::InvalidContentType { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_then_read() {
        let store = memory_store();
        let artifact = pdf("simulacion-credito-ana-2026-03-09.pdf", b"%PDF-1.3 test");

        let stored = store.save(&artifact).await.expect("save");
        assert_eq!(stored.key, "simulacion-credito-ana-2026-03-09.pdf");
        assert_eq!(stored.size, 13);
        assert!(store.exists(&stored.key).await);
        assert_eq!(store.read(&stored.key).await.expect("read"), artifact.bytes);
    }

    #[tokio::test]
    async fn test_save_overwrites_same_key() {
        let store = memory_store();
        store.save(&pdf("r.pdf", b"first")).await.expect("save");
        store.save(&pdf("r.pdf", b"second")).await.expect("save");

        assert_eq!(store.read("r.pdf").await.expect("read"), b"second".to_vec());
    }

    #[tokio::test]
    async fn test_rejected_artifact_is_not_written() {
        let config =
            StorageConfig::new(StorageProvider::Memory).with_max_artifact_size(1);
        let store = ArtifactStore::from_config(config).expect("memory store");

        assert!(store.save(&pdf("big.pdf", b"too big")).await.is_err());
        assert!(!store.exists("big.pdf").await);
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let store = memory_store();
        let err = store.read("missing.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { key } if key == "missing.pdf"));
    }

    #[tokio::test]
    async fn test_delete_removes_artifact() {
        let store = memory_store();
        let stored = store.save(&pdf("d.pdf", b"x")).await.expect("save");
        store.delete(&stored.key).await.expect("delete");
        assert!(!store.exists(&stored.key).await);
    }
}
