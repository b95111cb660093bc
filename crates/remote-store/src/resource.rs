//! # Resource Trait
//!
//! Contract a record type must satisfy to be served through the store
//! protocol. By defining it once, both backends ([`MemoryStore`] and
//! [`HttpStore`]) and the [`StoreClient`] work with any collection of
//! records, and the compiler guarantees a client for one resource cannot
//! be fed another resource's payloads.
//!
//! The trait deliberately stays on the data plane: a resource knows its id,
//! the collection it lives in, and how a full record is built from a
//! creation draft. Everything about transport belongs to the backends.
//!
//! [`MemoryStore`]: crate::memory::MemoryStore
//! [`HttpStore`]: crate::http::HttpStore
//! [`StoreClient`]: crate::client::StoreClient

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait implemented by any record type managed by a store backend.
///
/// # Design Note
/// The store assigns ids, so `Id` must be constructible `From<u32>`: the
/// in-process backend mints ascending numeric ids exactly the way the remote
/// store does, which keeps tests and standalone runs faithful to production
/// behavior.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier of a record.
    ///
    /// `Ord` lets a backend keep records in ascending id order, matching the
    /// listing order of the remote store.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32> + 'static;

    /// The payload accepted by `create`. It carries everything but the id;
    /// the store fills that in.
    type Draft: Send + Sync + Debug + 'static;

    /// Path segment the HTTP backend appends to the base address
    /// (e.g. `"orders"` serves `{base}/orders`).
    const COLLECTION: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Construct the full record from a freshly minted id and the creation
    /// payload.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}
