//! # Order Board
//!
//! Back-office view over every persisted order: a local cache of the store's
//! records, one editable status draft per order, and a per-order commit that
//! either persists the draft or — for `Cancelled` — deletes the record
//! outright.
//!
//! ## Commit Phases
//!
//! A commit is split into three phases so that commits for *different*
//! orders may overlap while a second commit for the *same* order is rejected
//! until the first lands:
//!
//! 1. [`OrderBoard::stage_commit`] resolves the draft into a store action
//!    and marks the id in flight.
//! 2. [`StagedCommit::run`] performs exactly one store call; it borrows
//!    nothing from the board, so any number of staged commits can run
//!    concurrently.
//! 3. [`OrderBoard::complete_commit`] reconciles the outcome back into the
//!    cache and drafts and clears the in-flight mark.
//!
//! [`OrderBoard::commit`] chains the three for sequential callers.
//!
//! ## Cache Staleness
//!
//! A successful status update does not rewrite the cached record: the cache
//! keeps the value from the last load, and the fresh status lives in the
//! draft map until the next [`OrderBoard::load`]. UIs should therefore bind
//! to [`OrderBoard::displayed_status`], which reads the draft first.

use crate::model::{Order, OrderId, OrderStatus};
use remote_store::{StoreClient, StoreError};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

mod error;
pub use error::{BoardError, Notice};

/// Back-office state over the order collection.
pub struct OrderBoard {
    store: StoreClient<Order>,
    orders: Vec<Order>,
    drafts: HashMap<OrderId, OrderStatus>,
    in_flight: HashSet<OrderId>,
    loaded: bool,
}

impl OrderBoard {
    /// Creates a board with nothing loaded yet.
    pub fn new(store: StoreClient<Order>) -> Self {
        Self {
            store,
            orders: Vec::new(),
            drafts: HashMap::new(),
            in_flight: HashSet::new(),
            loaded: false,
        }
    }

    /// Orders as last fetched from the store.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// True until the first successful [`load`](Self::load).
    ///
    /// The board screen renders its loading indicator off this flag,
    /// including after a failed first fetch.
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// The unconfirmed status draft for `id`, if the board knows the order.
    pub fn draft_status(&self, id: OrderId) -> Option<OrderStatus> {
        self.drafts.get(&id).copied()
    }

    /// The status a UI should show for `id`: the draft if present, otherwise
    /// the persisted value from the cache.
    pub fn displayed_status(&self, id: OrderId) -> Option<OrderStatus> {
        self.draft_status(id)
            .or_else(|| self.orders.iter().find(|o| o.id == id).map(|o| o.status))
    }

    /// Replaces the cache and drafts with the store's current contents.
    ///
    /// Every loaded order gets exactly one draft entry, seeded with its
    /// persisted status. On failure nothing changes; the call can simply be
    /// repeated.
    ///
    /// # Errors
    ///
    /// [`BoardError::LoadFailed`] wrapping the store error.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), BoardError> {
        match self.store.list().await {
            Ok(orders) => {
                self.drafts = orders.iter().map(|o| (o.id, o.status)).collect();
                info!(count = orders.len(), "Orders loaded");
                self.orders = orders;
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Load failed");
                Err(BoardError::LoadFailed(e))
            }
        }
    }

    /// Overwrites the status draft for `id`.
    ///
    /// Purely local; nothing is persisted until a commit. An id the board
    /// has not loaded gets an entry too — it stays inert until the next
    /// load rebuilds the map.
    pub fn set_pending_status(&mut self, id: OrderId, status: OrderStatus) {
        debug!(%id, %status, "Draft status set");
        self.drafts.insert(id, status);
    }

    /// Resolves the draft for `id` into a store action and marks the id in
    /// flight.
    ///
    /// A `Cancelled` draft stages a delete; anything else stages an update
    /// carrying the full prior record with only the status replaced — the
    /// store expects a complete representation, not a patch.
    ///
    /// # Errors
    ///
    /// [`BoardError::CommitInFlight`] if a commit for `id` has not completed
    /// yet, [`BoardError::UnknownOrder`] if `id` has no draft (or, for an
    /// update, no cached record to build the payload from).
    pub fn stage_commit(&mut self, id: OrderId) -> Result<StagedCommit, BoardError> {
        if self.in_flight.contains(&id) {
            warn!(%id, "Commit already in flight");
            return Err(BoardError::CommitInFlight(id));
        }
        let Some(&status) = self.drafts.get(&id) else {
            warn!(%id, "No draft for order");
            return Err(BoardError::UnknownOrder(id));
        };

        let action = if status == OrderStatus::Cancelled {
            CommitAction::Delete
        } else {
            let Some(prior) = self.orders.iter().find(|o| o.id == id) else {
                warn!(%id, "No cached record for order");
                return Err(BoardError::UnknownOrder(id));
            };
            let mut record = prior.clone();
            record.status = status;
            CommitAction::Update(record)
        };

        self.in_flight.insert(id);
        debug!(%id, %status, "Commit staged");
        Ok(StagedCommit { id, status, action })
    }

    /// Reconciles a finished commit into local state and clears the
    /// in-flight mark.
    ///
    /// Delete success removes the order from the cache and drops its draft,
    /// keeping one draft per cached order. Update success leaves the cached
    /// record as loaded; only the draft map carries the new status. Failures
    /// change nothing beyond the pending edit the user already made.
    ///
    /// # Errors
    ///
    /// [`BoardError::DeleteFailed`] or [`BoardError::UpdateFailed`] carrying
    /// the store error — a record that vanished underneath the board
    /// surfaces here as `NotFound`, it never panics.
    pub fn complete_commit(&mut self, outcome: CommitOutcome) -> Result<Notice, BoardError> {
        let CommitOutcome { id, status, result } = outcome;
        self.in_flight.remove(&id);

        match result {
            CommitResult::Deleted => {
                self.orders.retain(|o| o.id != id);
                self.drafts.remove(&id);
                info!(%id, remaining = self.orders.len(), "Order deleted");
                Ok(Notice::Deleted(id))
            }
            CommitResult::Updated(_) => {
                // Deliberately no cache rewrite; see the module notes on
                // staleness.
                info!(%id, %status, "Order status updated");
                Ok(Notice::StatusUpdated { id, status })
            }
            CommitResult::DeleteFailed(e) => {
                warn!(%id, error = %e, "Delete failed");
                Err(BoardError::DeleteFailed { id, source: e })
            }
            CommitResult::UpdateFailed(e) => {
                warn!(%id, error = %e, "Update failed");
                Err(BoardError::UpdateFailed { id, source: e })
            }
        }
    }

    /// Stages, runs, and completes a commit in one call.
    ///
    /// For callers that do not overlap commits; the split-phase methods are
    /// the concurrent path.
    pub async fn commit(&mut self, id: OrderId) -> Result<Notice, BoardError> {
        let staged = self.stage_commit(id)?;
        let outcome = staged.run(&self.store).await;
        self.complete_commit(outcome)
    }

    /// A clone of the underlying store handle, for running staged commits.
    pub fn store_handle(&self) -> StoreClient<Order> {
        self.store.clone()
    }
}

/// One commit resolved to its store action, detached from the board.
#[derive(Debug)]
pub struct StagedCommit {
    id: OrderId,
    status: OrderStatus,
    action: CommitAction,
}

#[derive(Debug)]
enum CommitAction {
    Delete,
    Update(Order),
}

impl StagedCommit {
    /// The order this commit targets.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Performs exactly one store call and captures the result.
    #[instrument(skip(self, store), fields(id = %self.id))]
    pub async fn run(self, store: &StoreClient<Order>) -> CommitOutcome {
        let result = match self.action {
            CommitAction::Delete => match store.delete(self.id).await {
                Ok(()) => CommitResult::Deleted,
                Err(e) => CommitResult::DeleteFailed(e),
            },
            CommitAction::Update(record) => match store.update(self.id, record).await {
                Ok(updated) => CommitResult::Updated(updated),
                Err(e) => CommitResult::UpdateFailed(e),
            },
        };
        CommitOutcome {
            id: self.id,
            status: self.status,
            result,
        }
    }
}

/// What a [`StagedCommit`] came back with; feed it to
/// [`OrderBoard::complete_commit`] to reconcile.
#[derive(Debug)]
pub struct CommitOutcome {
    id: OrderId,
    status: OrderStatus,
    result: CommitResult,
}

#[derive(Debug)]
enum CommitResult {
    Deleted,
    Updated(Order),
    DeleteFailed(StoreError),
    UpdateFailed(StoreError),
}
