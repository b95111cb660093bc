//! Error types for the order composer.

use remote_store::StoreError;
use thiserror::Error;

/// Errors that can occur while composing or submitting an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComposerError {
    /// Submission was attempted with no line items on the form.
    #[error("Order must contain at least one line item")]
    EmptyOrder,

    /// An edit referenced a line item index that does not exist.
    #[error("Line item {index} out of range (form has {len})")]
    LineItemOutOfRange { index: usize, len: usize },

    /// The remote store rejected or never received the submission.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
