use orderdesk::board::{BoardError, Notice};
use orderdesk::composer::Navigation;
use orderdesk::lifecycle::Desk;
use orderdesk::model::{LineItemField, OrderId, OrderStatus, SupplierField};
use remote_store::StoreError;

/// Full end-to-end flow against the in-memory backend: compose an order,
/// walk its status across the board, and cancel it.
#[tokio::test]
async fn test_full_compose_load_commit_flow() {
    let desk = Desk::standalone();
    let mut composer = desk.composer();

    // Fill the form
    composer.add_line_item();
    composer
        .edit_line_item(0, LineItemField::ProductName, "Hammer")
        .expect("Failed to edit line item");
    composer
        .edit_line_item(0, LineItemField::Quantity, "10")
        .expect("Failed to edit line item");
    composer.edit_supplier_field(SupplierField::Name, "Dana Reyes");
    composer.edit_supplier_field(SupplierField::CompanyName, "Reyes Hardware Supply");

    // Submit and verify the persisted record
    let submitted = composer.submit().await.expect("Failed to submit order");
    let order_id = submitted.order.id;
    assert_eq!(order_id, OrderId::from(1), "First id should be 1");
    assert_eq!(submitted.order.product_name, "Hammer");
    assert_eq!(submitted.order.quantity, "10");
    assert_eq!(submitted.order.category, "Category");
    assert_eq!(submitted.order.status, OrderStatus::Pending);
    assert!(matches!(submitted.navigate, Navigation::ToBoard));

    // Success cleared the form and set the confirmation line
    assert!(composer.line_items().is_empty());
    assert_eq!(composer.supplier().name, "");
    assert_eq!(composer.status().to_string(), "Form Submitted Successfully");

    // The board sees the order with a draft seeded from its status
    let mut board = desk.board();
    board.load().await.expect("Failed to load board");
    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.draft_status(order_id), Some(OrderStatus::Pending));

    // Mark it received; the store is updated but the cache keeps the value
    // from the last load until reloaded
    board.set_pending_status(order_id, OrderStatus::Received);
    let notice = board.commit(order_id).await.expect("Failed to commit");
    assert_eq!(
        notice,
        Notice::StatusUpdated {
            id: order_id,
            status: OrderStatus::Received,
        }
    );
    assert_eq!(board.orders()[0].status, OrderStatus::Pending);
    assert_eq!(board.displayed_status(order_id), Some(OrderStatus::Received));

    // Reloading proves the update persisted the record wholesale
    board.load().await.expect("Failed to reload board");
    assert_eq!(board.orders()[0].status, OrderStatus::Received);
    assert_eq!(board.orders()[0].product_name, "Hammer");
    assert_eq!(board.orders()[0].quantity, "10");

    // Cancel deletes the record and both local entries
    board.set_pending_status(order_id, OrderStatus::Cancelled);
    let notice = board.commit(order_id).await.expect("Failed to commit");
    assert_eq!(notice, Notice::Deleted(order_id));
    assert!(board.orders().is_empty());
    assert_eq!(board.draft_status(order_id), None);

    // The store agrees
    board.load().await.expect("Failed to reload board");
    assert!(board.orders().is_empty(), "Cancelled order should be gone");

    // Graceful shutdown: all handle clones must go first
    drop(composer);
    drop(board);
    desk.shutdown().await.expect("Failed to shutdown desk");
}

/// Cancelling an order that was deleted behind the board's back surfaces
/// `NotFound` as a commit error instead of crashing or corrupting state.
#[tokio::test]
async fn test_cancelling_a_vanished_order_surfaces_not_found() {
    let desk = Desk::standalone();
    let mut composer = desk.composer();

    composer.add_line_item();
    composer
        .edit_line_item(0, LineItemField::ProductName, "Tape Measure")
        .expect("Failed to edit line item");
    composer
        .edit_line_item(0, LineItemField::Quantity, "1")
        .expect("Failed to edit line item");
    let submitted = composer.submit().await.expect("Failed to submit order");
    let order_id = submitted.order.id;

    let mut board = desk.board();
    board.load().await.expect("Failed to load board");

    // Someone else deletes the record directly
    let store = desk.store();
    store.delete(order_id).await.expect("Failed to delete order");
    drop(store);

    board.set_pending_status(order_id, OrderStatus::Cancelled);
    let result = board.commit(order_id).await;
    assert_eq!(
        result,
        Err(BoardError::DeleteFailed {
            id: order_id,
            source: StoreError::NotFound("1".to_string()),
        })
    );

    // The board's view is untouched; the next load reconciles it
    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.draft_status(order_id), Some(OrderStatus::Cancelled));

    drop(composer);
    drop(board);
    desk.shutdown().await.expect("Failed to shutdown desk");
}

/// Two staged commits for different orders run concurrently against the real
/// backend; re-staging an in-flight id is refused.
#[tokio::test]
async fn test_staged_commits_for_different_ids_overlap() {
    let desk = Desk::standalone();
    let mut composer = desk.composer();

    // Submit two orders; the form resets after each success
    for product in ["Hammer", "Wrench"] {
        composer.add_line_item();
        composer
            .edit_line_item(0, LineItemField::ProductName, product)
            .expect("Failed to edit line item");
        composer
            .edit_line_item(0, LineItemField::Quantity, "2")
            .expect("Failed to edit line item");
        composer.submit().await.expect("Failed to submit order");
    }

    let mut board = desk.board();
    board.load().await.expect("Failed to load board");
    assert_eq!(board.orders().len(), 2);

    board.set_pending_status(OrderId::from(1), OrderStatus::Cancelled);
    board.set_pending_status(OrderId::from(2), OrderStatus::Received);

    let staged_cancel = board
        .stage_commit(OrderId::from(1))
        .expect("Failed to stage cancel");
    let staged_update = board
        .stage_commit(OrderId::from(2))
        .expect("Failed to stage update");
    assert_eq!(
        board.stage_commit(OrderId::from(2)).unwrap_err(),
        BoardError::CommitInFlight(OrderId::from(2))
    );

    // Both store calls are in flight at once
    let store = board.store_handle();
    let (cancel_outcome, update_outcome) =
        tokio::join!(staged_cancel.run(&store), staged_update.run(&store));
    drop(store);

    assert_eq!(
        board.complete_commit(cancel_outcome),
        Ok(Notice::Deleted(OrderId::from(1)))
    );
    assert_eq!(
        board.complete_commit(update_outcome),
        Ok(Notice::StatusUpdated {
            id: OrderId::from(2),
            status: OrderStatus::Received,
        })
    );

    // The store's truth after both commits: one order, now received
    board.load().await.expect("Failed to reload board");
    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.orders()[0].id, OrderId::from(2));
    assert_eq!(board.orders()[0].status, OrderStatus::Received);
    assert_eq!(board.orders()[0].product_name, "Wrench");

    drop(composer);
    drop(board);
    desk.shutdown().await.expect("Failed to shutdown desk");
}
