//! Artifact store using Apache OpenDAL.
//!
//! Persists exported reports on one of:
//! - Local filesystem
//! - Process memory (tests and dry runs)
//!
//! Each artifact is written in a single call. A failed write removes whatever
//! may have landed under the key, so readers never see a partial artifact.

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{ArtifactStore, StoredArtifact};
