//! Runtime wiring: one store backend task plus constructors for the two
//! front-office components that talk to it.

use crate::board::OrderBoard;
use crate::composer::OrderComposer;
use crate::model::Order;
use remote_store::{HttpStore, MemoryStore, StoreClient, StoreConfig, StoreError};
use tracing::{error, info};

/// Channel capacity between component handles and the store task.
const STORE_BUFFER: usize = 32;

/// The runtime orchestrator for an order desk.
///
/// `Desk` owns the store backend task and hands out the pieces built on top
/// of it:
/// - **Lifecycle**: starts the backend on construction, stops it in
///   [`shutdown`](Self::shutdown)
/// - **Wiring**: [`composer`](Self::composer) and [`board`](Self::board)
///   each get their own clone of the store handle
///
/// # Example
///
/// ```ignore
/// let desk = Desk::standalone();
/// let mut composer = desk.composer();
/// // ... compose and submit orders ...
/// drop(composer);
/// desk.shutdown().await?;
/// ```
pub struct Desk {
    store: StoreClient<Order>,
    /// Handle for the running backend task (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl Desk {
    /// Creates a desk backed by an in-process [`MemoryStore`].
    ///
    /// Nothing leaves the process; ideal for demos and integration tests.
    pub fn standalone() -> Self {
        let (store, client) = MemoryStore::<Order>::new(STORE_BUFFER);
        let handle = tokio::spawn(store.run());
        Self {
            store: client,
            handle,
        }
    }

    /// Creates a desk backed by an [`HttpStore`] pointed at `config`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Config`] if the configuration cannot produce an HTTP
    /// client.
    pub fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        let (store, client) = HttpStore::<Order>::new(config, STORE_BUFFER)?;
        let handle = tokio::spawn(store.run());
        Ok(Self {
            store: client,
            handle,
        })
    }

    /// A fresh order entry form wired to this desk's store.
    pub fn composer(&self) -> OrderComposer {
        OrderComposer::new(self.store.clone())
    }

    /// A fresh board wired to this desk's store; call
    /// [`load`](OrderBoard::load) before reading from it.
    pub fn board(&self) -> OrderBoard {
        OrderBoard::new(self.store.clone())
    }

    /// A clone of the raw store handle, for callers that bypass the
    /// components.
    pub fn store(&self) -> StoreClient<Order> {
        self.store.clone()
    }

    /// Gracefully shuts down the desk.
    ///
    /// Drops the desk's own store handle and waits for the backend task to
    /// exit. The task only exits once *every* handle clone is gone, so drop
    /// any live composers and boards before calling this.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the backend shut down cleanly
    /// - `Err(String)` if the backend task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down desk...");

        // Dropping the handle closes the channel sender; the backend's
        // receiver returns None and its loop exits.
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Desk shutdown complete.");
        Ok(())
    }
}
