//! # In-Process Backend
//!
//! This module defines the `MemoryStore`, a backend that serves the store
//! protocol from process-local state. It is what standalone runs and
//! integration tests talk to instead of a live HTTP store.
//!
//! # Architecture Note
//! The store task owns its records outright and processes requests
//! *sequentially* in a loop, so there is no `Mutex` or `RwLock` anywhere:
//! exclusive ownership of state within the task is the synchronization.
//! Ids are minted from an internal counter starting at 1, ascending, exactly
//! like the remote store assigns them.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::resource::Resource;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// In-process store backend for a single collection.
///
/// # Usage Pattern
///
/// 1. **Create**: `MemoryStore::new()` returns the store (server side) and
///    its [`StoreClient`].
/// 2. **Run**: spawn `store.run()` in a background task.
/// 3. **Use**: clone the client into whichever components need the store.
///
/// The run loop exits when every client clone has been dropped.
pub struct MemoryStore<R: Resource> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    records: BTreeMap<R::Id, R>,
    next_id: u32,
}

impl<R: Resource> MemoryStore<R> {
    /// Creates a new `MemoryStore` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. If the channel
    ///   is full, calls on the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            records: BTreeMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (store, client)
    }

    /// Runs the backend loop, processing requests until the channel closes.
    pub async fn run(mut self) {
        let resource = R::COLLECTION;
        info!(resource, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    debug!(resource, size = self.records.len(), "List");
                    // BTreeMap iteration yields ascending ids, the order the
                    // remote store lists records in.
                    let all: Vec<R> = self.records.values().cloned().collect();
                    let _ = respond_to.send(Ok(all));
                }
                StoreRequest::Create { draft, respond_to } => {
                    debug!(resource, ?draft, "Create");
                    let id = R::Id::from(self.next_id);
                    self.next_id += 1;
                    let record = R::from_draft(id.clone(), draft);
                    self.records.insert(id.clone(), record.clone());
                    info!(resource, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Update {
                    id,
                    record,
                    respond_to,
                } => {
                    debug!(resource, %id, ?record, "Update");
                    if self.records.contains_key(&id) {
                        self.records.insert(id.clone(), record.clone());
                        info!(resource, %id, "Updated");
                        let _ = respond_to.send(Ok(record));
                    } else {
                        warn!(resource, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(resource, %id, "Delete");
                    if self.records.remove(&id).is_some() {
                        info!(resource, %id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(resource, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(resource, size = self.records.len(), "Shutdown");
    }
}
