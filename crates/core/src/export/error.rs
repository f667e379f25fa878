//! Export error types.

use thiserror::Error;

use crate::reports::CompositionError;

/// Errors that prevent an artifact from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Composition failed; the error is passed through unchanged.
    #[error(transparent)]
    Composition(#[from] CompositionError),

    /// The PDF writer rejected the document.
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

impl ExportError {
    /// Create a render error.
    #[must_use]
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
