//! # Mock Store & Testing Guide
//!
//! The [`MockStore<R>`] type stands in for a store backend behind the same
//! [`StoreClient<R>`] API as production, but operates entirely in-memory. It
//! lets you queue expectations and canned results, enabling fast,
//! deterministic tests of component logic without spawning any backend.
//!
//! ## When to use Mocks vs the In-Process Backend
//!
//! | Feature | MockStore | MemoryStore |
//! |---------|-----------|-------------|
//! | **Speed** | Instant (expectation queue) | Fast (tokio task) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real record storage |
//! | **Use Case** | Unit testing logic *around* the client | End-to-end flows |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use remote_store::mock::MockStore;
//! use remote_store::Resource;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Ticket { id: u32, title: String }
//!
//! #[derive(Debug)]
//! struct TicketDraft { title: String }
//!
//! impl Resource for Ticket {
//!     type Id = u32;
//!     type Draft = TicketDraft;
//!     const COLLECTION: &'static str = "tickets";
//!     fn id(&self) -> u32 { self.id }
//!     fn from_draft(id: u32, draft: TicketDraft) -> Self {
//!         Self { id, title: draft.title }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Queue expectations
//!     let mut mock = MockStore::<Ticket>::new();
//!     mock.expect_create()
//!         .return_ok(Ticket { id: 1, title: "New".into() });
//!     mock.expect_list()
//!         .return_ok(vec![Ticket { id: 1, title: "New".into() }]);
//!
//!     // 2. Drive the client under test
//!     let client = mock.client();
//!     let created = client.create(TicketDraft { title: "New".into() }).await.unwrap();
//!     assert_eq!(created.id, 1);
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!
//!     // 3. Ensure every expectation was consumed
//!     mock.verify();
//! }
//! ```
//!
//! Error injection works the same way: queue
//! `mock.expect_delete(1).return_err(StoreError::NotFound("1".into()))` and
//! verify the component surfaces the failure without touching its state.
//!
//! ## Channel Helpers
//!
//! When a test needs to inspect the request payload itself (not just answer
//! it), use [`create_mock_store`] to get a raw request receiver plus the
//! [`expect_list`]/[`expect_create`]/[`expect_update`]/[`expect_delete`]
//! helpers, and answer through the returned oneshot responder.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{Reply, StoreRequest};
use crate::resource::Resource;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
enum Expectation<R: Resource> {
    List {
        response: Result<Vec<R>, StoreError>,
    },
    Create {
        response: Result<R, StoreError>,
    },
    Update {
        id: R::Id,
        response: Result<R, StoreError>,
    },
    Delete {
        id: R::Id,
        response: Result<(), StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::<Order>::new();
/// mock.expect_list().return_ok(vec![order]);
/// mock.expect_delete(id).return_ok(());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<R: Resource> {
    client: StoreClient<R>,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: Resource> Default for MockStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> MockStore<R> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<R>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before touching channels

                match (request, expectation) {
                    (
                        StoreRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create {
                            draft: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update {
                            id,
                            record: _,
                            respond_to,
                        },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        if id != expected {
                            panic!("Expected update for {expected}, got {id}");
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        if id != expected {
                            panic!("Expected delete for {expected}, got {id}");
                        }
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<R> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<R> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<R> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: R::Id) -> UpdateExpectationBuilder<R> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: R::Id) -> DeleteExpectationBuilder<R> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<R: Resource> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: Resource> ListExpectationBuilder<R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, records: Vec<R>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Ok(records),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<R: Resource> {
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: Resource> CreateExpectationBuilder<R> {
    /// Sets the expectation to return the created record.
    pub fn return_ok(self, record: R) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<R: Resource> {
    id: R::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: Resource> UpdateExpectationBuilder<R> {
    /// Sets the expectation to return the updated record.
    pub fn return_ok(self, record: R) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<R: Resource> {
    id: R::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: Resource> DeleteExpectationBuilder<R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: ()) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit/integration tests, we don't want to spin up a full backend if we
/// are just testing the logic *around* the client (e.g. the composer's
/// submit path).
///
/// Instead, we create a "mock store": the client sends requests to a channel
/// we control (`receiver`). We can then inspect the requests arriving on that
/// channel, assert their payloads, and answer them in whatever order and with
/// whatever result the scenario needs.
///
/// **Note**: Consider using [`MockStore`] when the payload itself does not
/// matter.
pub fn create_mock_store<R: Resource>(
    buffer_size: usize,
) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next request is a List
pub async fn expect_list<R: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<Reply<Vec<R>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next request is a Create
pub async fn expect_create<R: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Draft, Reply<R>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is an Update
pub async fn expect_update<R: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Id, R, Reply<R>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            record,
            respond_to,
        }) => Some((id, record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Delete
pub async fn expect_delete<R: Resource>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Id, Reply<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u32,
        title: String,
    }

    #[derive(Debug)]
    struct TicketDraft {
        title: String,
    }

    impl Resource for Ticket {
        type Id = u32;
        type Draft = TicketDraft;

        const COLLECTION: &'static str = "tickets";

        fn id(&self) -> u32 {
            self.id
        }

        fn from_draft(id: u32, draft: TicketDraft) -> Self {
            Self {
                id,
                title: draft.title,
            }
        }
    }

    #[tokio::test]
    async fn test_channel_mock_exposes_payloads() {
        let (client, mut receiver) = create_mock_store::<Ticket>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TicketDraft {
                    title: "Broken lamp".to_string(),
                })
                .await
        });

        let (draft, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(draft.title, "Broken lamp");
        responder.send(Ok(Ticket::from_draft(1, draft))).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(ticket) if ticket.id == 1));
    }

    #[tokio::test]
    async fn test_expectation_queue_answers_in_order() {
        let mut mock = MockStore::<Ticket>::new();

        mock.expect_create().return_ok(Ticket {
            id: 1,
            title: "Broken lamp".to_string(),
        });
        mock.expect_list().return_ok(vec![Ticket {
            id: 1,
            title: "Broken lamp".to_string(),
        }]);
        mock.expect_delete(1).return_ok(());

        let client = mock.client();

        let created = client
            .create(TicketDraft {
                title: "Broken lamp".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 1);

        client.delete(1).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_expectation_queue_injects_errors() {
        let mut mock = MockStore::<Ticket>::new();
        mock.expect_delete(7)
            .return_err(StoreError::NotFound("7".to_string()));

        let client = mock.client();
        let result = client.delete(7).await;
        assert_eq!(result, Err(StoreError::NotFound("7".to_string())));

        mock.verify();
    }
}
