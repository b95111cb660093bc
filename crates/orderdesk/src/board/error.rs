//! Error and notice types for the order board.

use crate::model::{OrderId, OrderStatus};
use remote_store::StoreError;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading or committing board state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// The order list could not be fetched.
    #[error("Failed to load orders: {0}")]
    LoadFailed(StoreError),

    /// A commit was requested for an id the board has no draft for.
    #[error("Unknown order: {0}")]
    UnknownOrder(OrderId),

    /// A commit for this id is already on the wire.
    #[error("Commit already in flight for order {0}")]
    CommitInFlight(OrderId),

    /// The delete triggered by a Cancelled draft failed.
    #[error("Failed to delete order ID {id}: {source}")]
    DeleteFailed { id: OrderId, source: StoreError },

    /// The status update failed.
    #[error("Failed to update order status for ID {id}: {source}")]
    UpdateFailed { id: OrderId, source: StoreError },
}

/// User-visible outcome of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The Cancelled draft deleted the record.
    Deleted(OrderId),
    /// The new status was persisted.
    StatusUpdated { id: OrderId, status: OrderStatus },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Deleted(id) => write!(f, "Order ID {id} has been deleted successfully"),
            Notice::StatusUpdated { id, .. } => {
                write!(f, "Order status for ID {id} updated successfully")
            }
        }
    }
}
