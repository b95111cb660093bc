//! Wire-level tests for board commits: what exactly goes to the store, and
//! how the board reconciles each outcome.

use orderdesk::board::{BoardError, Notice, OrderBoard};
use orderdesk::model::{Order, OrderId, OrderStatus};
use remote_store::mock::{create_mock_store, expect_delete, expect_list, expect_update};
use remote_store::{StoreError, StoreRequest};
use tokio::sync::mpsc;

fn order(id: u32, product_name: &str, quantity: &str, status: OrderStatus) -> Order {
    Order {
        id: OrderId::from(id),
        product_name: product_name.to_string(),
        category: "Category".to_string(),
        quantity: quantity.to_string(),
        status,
    }
}

/// Builds a board over a channel mock and answers its initial list request
/// with `records`.
async fn loaded_board(
    records: Vec<Order>,
) -> (OrderBoard, mpsc::Receiver<StoreRequest<Order>>) {
    let (client, mut receiver) = create_mock_store::<Order>(10);
    let mut board = OrderBoard::new(client);

    // `load` borrows the board mutably, so the board rides along in the task
    // and comes back with the result.
    let load_task = tokio::spawn(async move {
        let result = board.load().await;
        (board, result)
    });

    let responder = expect_list(&mut receiver)
        .await
        .expect("Expected List request");
    responder.send(Ok(records)).unwrap();

    let (board, result) = load_task.await.unwrap();
    result.expect("Failed to load board");
    (board, receiver)
}

/// A cancelled draft commits as a single delete, and success removes the
/// order from both the cache and the draft map.
#[tokio::test]
async fn test_cancelled_commit_sends_exactly_one_delete() {
    let (mut board, mut receiver) = loaded_board(vec![
        order(1, "Hammer", "2", OrderStatus::Pending),
        order(2, "Wrench", "5", OrderStatus::Pending),
    ])
    .await;

    board.set_pending_status(OrderId::from(1), OrderStatus::Cancelled);

    let commit_task = tokio::spawn(async move {
        let result = board.commit(OrderId::from(1)).await;
        (board, result)
    });

    let (id, responder) = expect_delete(&mut receiver)
        .await
        .expect("Expected Delete request");
    assert_eq!(id, OrderId::from(1));
    responder.send(Ok(())).unwrap();

    let (board, result) = commit_task.await.unwrap();
    assert_eq!(result, Ok(Notice::Deleted(OrderId::from(1))));

    // No follow-up traffic: the delete was the whole conversation.
    assert!(
        receiver.try_recv().is_err(),
        "Cancel should issue exactly one store request"
    );

    // Order 1 is gone from the cache and the draft map; order 2 survives.
    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.orders()[0].id, OrderId::from(2));
    assert_eq!(board.draft_status(OrderId::from(1)), None);
    assert_eq!(
        board.draft_status(OrderId::from(2)),
        Some(OrderStatus::Pending)
    );
}

/// A non-cancel commit sends the full prior record with only the status
/// replaced, and deliberately leaves the cached copy stale afterwards.
#[tokio::test]
async fn test_received_commit_sends_the_full_prior_record() {
    let (mut board, mut receiver) =
        loaded_board(vec![order(1, "Wrench", "3", OrderStatus::Pending)]).await;

    board.set_pending_status(OrderId::from(1), OrderStatus::Received);

    let commit_task = tokio::spawn(async move {
        let result = board.commit(OrderId::from(1)).await;
        (board, result)
    });

    let (id, record, responder) = expect_update(&mut receiver)
        .await
        .expect("Expected Update request");
    assert_eq!(id, OrderId::from(1));

    // The payload is the cached record wholesale, not a status-only patch.
    assert_eq!(record.product_name, "Wrench");
    assert_eq!(record.category, "Category");
    assert_eq!(record.quantity, "3");
    assert_eq!(record.status, OrderStatus::Received);

    responder.send(Ok(record)).unwrap();

    let (board, result) = commit_task.await.unwrap();
    assert_eq!(
        result,
        Ok(Notice::StatusUpdated {
            id: OrderId::from(1),
            status: OrderStatus::Received,
        })
    );
    assert!(
        receiver.try_recv().is_err(),
        "Update should issue exactly one store request"
    );

    // The cache still shows the value from the last load; only the draft
    // (and therefore the displayed status) carries the new one.
    assert_eq!(board.orders()[0].status, OrderStatus::Pending);
    assert_eq!(
        board.displayed_status(OrderId::from(1)),
        Some(OrderStatus::Received)
    );
}

/// Deleting a record that vanished server-side surfaces `NotFound` as a
/// commit error and leaves the board state untouched.
#[tokio::test]
async fn test_deleting_a_vanished_order_surfaces_not_found() {
    let (mut board, mut receiver) =
        loaded_board(vec![order(1, "Pliers", "1", OrderStatus::Pending)]).await;

    board.set_pending_status(OrderId::from(1), OrderStatus::Cancelled);

    let commit_task = tokio::spawn(async move {
        let result = board.commit(OrderId::from(1)).await;
        (board, result)
    });

    let (_, responder) = expect_delete(&mut receiver)
        .await
        .expect("Expected Delete request");
    responder
        .send(Err(StoreError::NotFound("1".to_string())))
        .unwrap();

    let (board, result) = commit_task.await.unwrap();
    assert_eq!(
        result,
        Err(BoardError::DeleteFailed {
            id: OrderId::from(1),
            source: StoreError::NotFound("1".to_string()),
        })
    );

    // Failure removes nothing: the record stays cached, the draft stays set.
    assert_eq!(board.orders().len(), 1);
    assert_eq!(
        board.draft_status(OrderId::from(1)),
        Some(OrderStatus::Cancelled)
    );
}

/// A rejected update keeps the draft in place and clears the in-flight mark
/// so the user can simply commit again.
#[tokio::test]
async fn test_update_failure_keeps_the_draft_for_retry() {
    let (mut board, mut receiver) =
        loaded_board(vec![order(1, "Level", "4", OrderStatus::Pending)]).await;

    board.set_pending_status(OrderId::from(1), OrderStatus::Received);

    let commit_task = tokio::spawn(async move {
        let result = board.commit(OrderId::from(1)).await;
        (board, result)
    });

    let (_, _, responder) = expect_update(&mut receiver)
        .await
        .expect("Expected Update request");
    responder.send(Err(StoreError::Rejected(500))).unwrap();

    let (mut board, result) = commit_task.await.unwrap();
    assert_eq!(
        result,
        Err(BoardError::UpdateFailed {
            id: OrderId::from(1),
            source: StoreError::Rejected(500),
        })
    );

    assert_eq!(board.orders()[0].status, OrderStatus::Pending);
    assert_eq!(
        board.draft_status(OrderId::from(1)),
        Some(OrderStatus::Received)
    );

    // The failed commit released its in-flight mark, so staging works again.
    let staged = board
        .stage_commit(OrderId::from(1))
        .expect("Retry should stage cleanly");
    assert_eq!(staged.id(), OrderId::from(1));
}

/// Staged commits for different orders run concurrently and tolerate
/// out-of-order completion, while re-staging an in-flight id is refused.
#[tokio::test]
async fn test_commits_for_different_orders_overlap() {
    let (mut board, mut receiver) = loaded_board(vec![
        order(1, "Hammer", "2", OrderStatus::Pending),
        order(2, "Wrench", "5", OrderStatus::Pending),
    ])
    .await;

    board.set_pending_status(OrderId::from(1), OrderStatus::Cancelled);
    board.set_pending_status(OrderId::from(2), OrderStatus::Received);

    let staged_cancel = board
        .stage_commit(OrderId::from(1))
        .expect("Failed to stage cancel");
    let staged_update = board
        .stage_commit(OrderId::from(2))
        .expect("Failed to stage update");

    // While a commit is in flight, its id cannot be staged again.
    assert_eq!(
        board.stage_commit(OrderId::from(1)).unwrap_err(),
        BoardError::CommitInFlight(OrderId::from(1))
    );

    let store = board.store_handle();
    let driver = tokio::spawn(async move {
        tokio::join!(staged_cancel.run(&store), staged_update.run(&store))
    });

    // Requests arrive in staging order...
    let (delete_id, delete_responder) = expect_delete(&mut receiver)
        .await
        .expect("Expected Delete request");
    assert_eq!(delete_id, OrderId::from(1));
    let (update_id, record, update_responder) = expect_update(&mut receiver)
        .await
        .expect("Expected Update request");
    assert_eq!(update_id, OrderId::from(2));

    // ...but are answered in reverse, which the staged commits tolerate.
    update_responder.send(Ok(record)).unwrap();
    delete_responder.send(Ok(())).unwrap();

    let (cancel_outcome, update_outcome) = driver.await.unwrap();
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

    // Order 1 is gone everywhere; order 2 keeps its stale cache entry.
    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.orders()[0].id, OrderId::from(2));
    assert_eq!(board.orders()[0].status, OrderStatus::Pending);
    assert_eq!(board.draft_status(OrderId::from(1)), None);
    assert_eq!(
        board.displayed_status(OrderId::from(2)),
        Some(OrderStatus::Received)
    );
}
