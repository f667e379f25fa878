//! Storage error types.

use thiserror::Error;

/// Why an artifact could not be stored or fetched.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Rejected before writing: the artifact is over the configured limit.
    #[error("artifact is {size} bytes, limit is {max}")]
    ArtifactTooLarge {
        /// Artifact size.
        size: u64,
        /// Configured limit.
        max: u64,
    },

    /// Rejected before writing: the content type is not on the allow list.
    #[error("content type '{content_type}' is not accepted")]
    InvalidContentType {
        /// The rejected content type.
        content_type: String,
    },

    /// Nothing is stored under the key.
    #[error("no artifact stored under '{key}'")]
    NotFound {
        /// Requested key.
        key: String,
    },

    /// The backend could not be set up.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// The filename leaves no usable key after sanitizing.
    #[error("'{0}' cannot be used as a storage key")]
    InvalidKey(String),

    /// The backend failed a read, write, or delete.
    #[error(transparent)]
    Operation(#[from] opendal::Error),
}

impl StorageError {
    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
