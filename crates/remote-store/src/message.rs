//! # Store Messages
//!
//! This module defines the request protocol spoken between the
//! [`StoreClient`](crate::client::StoreClient) and a backend task.
//!
//! # Collection-Oriented Protocol
//! The variants mirror the REST surface of the remote store: one operation
//! over the whole collection (`List`) and three keyed record operations
//! (`Create`, `Update`, `Delete`). There is no single-record fetch because no
//! workflow reads one record remotely; the board always works from the full
//! listing.
//!
//! Every variant carries a `respond_to` oneshot sender, so completions flow
//! back to whichever caller issued the request even when the backend serves
//! requests out of order.

use crate::error::StoreError;
use crate::resource::Resource;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by backends.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store backend.
///
/// Generic over `R:`[`Resource`], so the associated `Draft` and `Id` types
/// keep the payloads of different collections apart at compile time.
#[derive(Debug)]
pub enum StoreRequest<R: Resource> {
    /// Fetch every record in the collection, in ascending id order.
    List { respond_to: Reply<Vec<R>> },
    /// Persist a new record; the store assigns the id and replies with the
    /// full record.
    Create {
        draft: R::Draft,
        respond_to: Reply<R>,
    },
    /// Replace the record at `id` wholesale. The record's own id is expected
    /// to match `id`.
    Update {
        id: R::Id,
        record: R,
        respond_to: Reply<R>,
    },
    /// Remove the record at `id`.
    Delete { id: R::Id, respond_to: Reply<()> },
}
