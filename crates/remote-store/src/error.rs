//! # Store Errors
//!
//! This module defines the common error types shared by every store backend
//! and the client handle. Centralizing them keeps failure handling uniform no
//! matter which backend serves the requests.

use thiserror::Error;

/// Errors that can occur while talking to the remote store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The request never reached the store (connection refused, DNS failure,
    /// timeout).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The store answered with a non-success status code.
    #[error("Store rejected the request with status {0}")]
    Rejected(u16),

    /// A keyed operation referenced a record that no longer exists.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backend task is no longer accepting requests.
    #[error("Store backend closed")]
    Disconnected,

    /// The backend task dropped the reply channel without answering.
    #[error("Store backend dropped the reply")]
    ReplyDropped,

    /// The backend configuration is unusable.
    #[error("Store configuration error: {0}")]
    Config(String),
}
