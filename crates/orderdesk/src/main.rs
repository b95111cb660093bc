//! # Order Desk
//!
//! A back-office order workflow: compose orders against a product catalog,
//! then review, update, and cancel them on a board — all persisted through a
//! message-passing remote store.
//!
//! ## 🚀 Core Components
//!
//! - **[`remote_store`]**: Generic store backends (in-memory and HTTP) behind
//!   a cloneable, typed [`StoreClient`](remote_store::StoreClient) handle.
//! - **[`orderdesk::model`]**: Wire-faithful data structures ([`Order`](orderdesk::model::Order),
//!   [`OrderStatus`](orderdesk::model::OrderStatus)) plus the local-only form types.
//! - **[`orderdesk::composer`]**: The order entry form — line items, supplier
//!   details, and submission.
//! - **[`orderdesk::board`]**: The order board — cached records, status
//!   drafts, and per-order commits.
//! - **[`orderdesk::lifecycle`]**: Orchestration layer that wires the store
//!   backend to the components.
//!
//! ## 📚 Quick Start
//!
//! The application entry point is in [`main`], which demonstrates:
//! 1.  Starting a [`Desk`] on the in-memory backend.
//! 2.  Composing and submitting an order.
//! 3.  Walking its status across the board until cancellation.
//!
//! ## 🧪 Testing
//!
//! See [`remote_store::mock`] for utilities to test components without
//! spawning a store backend.

use orderdesk::composer::Navigation;
use orderdesk::lifecycle::Desk;
use orderdesk::model::{LineItemField, OrderStatus, SupplierField};
use remote_store::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order desk on the in-memory store");

    let desk = Desk::standalone();
    let mut composer = desk.composer();

    // Compose an order from the first catalog entry
    let item = composer
        .products()
        .first()
        .cloned()
        .ok_or_else(|| "Bundled catalog is empty".to_string())?;

    let span = tracing::info_span!("order_composition");
    let submitted = async {
        info!(product = %item.name, "Composing a new order");
        composer.add_line_item();
        composer
            .edit_line_item(0, LineItemField::ProductName, &item.name)
            .map_err(|e| e.to_string())?;
        composer
            .edit_line_item(0, LineItemField::Brand, &item.brand)
            .map_err(|e| e.to_string())?;
        composer
            .edit_line_item(0, LineItemField::Color, &item.color)
            .map_err(|e| e.to_string())?;
        composer
            .edit_line_item(0, LineItemField::Quantity, "10")
            .map_err(|e| e.to_string())?;

        composer.edit_supplier_field(SupplierField::Name, "Dana Reyes");
        composer.edit_supplier_field(SupplierField::Email, "dana@suppliers.example");
        composer.edit_supplier_field(SupplierField::CompanyName, "Reyes Hardware Supply");
        composer.edit_supplier_field(SupplierField::Address, "18 Dockside Row");
        composer.edit_supplier_field(SupplierField::Contact, "555-0134");

        composer.submit().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let order_id = submitted.order.id;
    info!(%order_id, status = %composer.status(), "Order submitted");

    match submitted.navigate {
        Navigation::ToBoard => info!("Routing to the order board"),
    }

    let mut board = desk.board();

    let span = tracing::info_span!("board_review");
    async {
        board.load().await.map_err(|e| e.to_string())?;
        info!(orders = board.orders().len(), "Board loaded");

        // Mark the order received and persist the change
        board.set_pending_status(order_id, OrderStatus::Received);
        let notice = board.commit(order_id).await.map_err(|e| e.to_string())?;
        info!(%notice, "Commit acknowledged");

        // Then cancel it, which deletes the record outright
        board.set_pending_status(order_id, OrderStatus::Cancelled);
        let notice = board.commit(order_id).await.map_err(|e| e.to_string())?;
        info!(%notice, "Commit acknowledged");

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // A second commit for a deleted order is refused, not crashed on
    match board.commit(order_id).await {
        Ok(notice) => info!(%notice, "Commit acknowledged"),
        Err(e) => error!(error = %e, "Commit rejected"),
    }

    // Drop component handles so the store task can wind down
    drop(composer);
    drop(board);
    desk.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
