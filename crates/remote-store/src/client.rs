//! # Store Client
//!
//! This module defines the generic client handle for talking to a store
//! backend.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::resource::Resource;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A type-safe handle for sending requests to a store backend.
///
/// The `StoreClient<R>` forwards list/create/update/delete requests over a
/// Tokio mpsc channel and receives results via oneshot channels. Components
/// never learn which backend answers; the in-process and HTTP backends serve
/// the identical protocol.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive and many
///   components can share one backend.
/// * **Async API** – all methods resolve to `Result<…, StoreError>`.
/// * **Generic** – works with any record type that implements [`Resource`].
#[derive(Clone)]
pub struct StoreClient<R: Resource> {
    sender: mpsc::Sender<StoreRequest<R>>,
}

impl<R: Resource> StoreClient<R> {
    pub fn new(sender: mpsc::Sender<StoreRequest<R>>) -> Self {
        Self { sender }
    }

    /// Fetch every record in the collection.
    #[instrument(skip(self), fields(resource = R::COLLECTION))]
    pub async fn list(&self) -> Result<Vec<R>, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;
        response.await.map_err(|_| StoreError::ReplyDropped)?
    }

    /// Persist a new record; the store assigns the id.
    #[instrument(skip(self, draft), fields(resource = R::COLLECTION))]
    pub async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        debug!(?draft, "Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { draft, respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;
        response.await.map_err(|_| StoreError::ReplyDropped)?
    }

    /// Replace the record at `id` wholesale.
    #[instrument(skip(self, record), fields(resource = R::COLLECTION, %id))]
    pub async fn update(&self, id: R::Id, record: R) -> Result<R, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                record,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Disconnected)?;
        response.await.map_err(|_| StoreError::ReplyDropped)?
    }

    /// Remove the record at `id`.
    #[instrument(skip(self), fields(resource = R::COLLECTION, %id))]
    pub async fn delete(&self, id: R::Id) -> Result<(), StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;
        response.await.map_err(|_| StoreError::ReplyDropped)?
    }
}
