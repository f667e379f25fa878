//! Report composition error types.

use thiserror::Error;

/// Errors that abort report composition.
///
/// Composition has no partial result: any of these means no document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// Page geometry cannot hold the report.
    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    /// The schedule does not start at installment 1.
    #[error("Amortization schedule must start at payment 1, found {found}")]
    ScheduleStart {
        /// Payment number of the first row.
        found: u32,
    },

    /// Payment numbers are not strictly increasing.
    #[error("Payment {found} at position {position} does not follow payment {previous}")]
    PaymentOutOfOrder {
        /// Zero-based row position.
        position: usize,
        /// Payment number of the preceding row.
        previous: u32,
        /// Payment number found.
        found: u32,
    },
}

impl CompositionError {
    /// Create an invalid layout error.
    #[must_use]
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }
}
