//! # Remote Store
//!
//! This crate provides the store-facing plumbing for client workflows whose
//! system of record lives behind a REST collection. It implements a
//! **collection-oriented protocol** (list/create/update/delete) spoken over
//! channels, with interchangeable backends behind a single client handle.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`Resource`]) - What a record looks like: its id,
//!    its collection, and how it is built from a creation draft.
//! 2. **Backend Layer** ([`MemoryStore`], [`HttpStore`]) - Who answers:
//!    a sequential in-process task, or a REST collection via `reqwest`.
//! 3. **Interface Layer** ([`StoreClient`]) - How callers ask: a cloneable,
//!    type-safe async handle.
//!
//! Components are written once against [`StoreClient`] and never learn which
//! backend serves them. That is what makes the workflow testable: unit tests
//! swap in the [`mock`] utilities, integration tests spawn a [`MemoryStore`],
//! and deployment connects an [`HttpStore`].
//!
//! ## Backends
//!
//! - [`MemoryStore`] processes requests sequentially and owns its records
//!   outright; ids are minted ascending from 1, matching the remote store's
//!   assignment.
//! - [`HttpStore`] forwards each request to `{base}/{collection}` in a task
//!   of its own, so completions may arrive out of order; the per-request
//!   oneshot reply channels keep responses correctly routed anyway.
//!
//! ## Example
//!
//! ```rust
//! use remote_store::{MemoryStore, Resource};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: u32, body: String }
//!
//! #[derive(Debug)]
//! struct NoteDraft { body: String }
//!
//! impl Resource for Note {
//!     type Id = u32;
//!     type Draft = NoteDraft;
//!     const COLLECTION: &'static str = "notes";
//!     fn id(&self) -> u32 { self.id }
//!     fn from_draft(id: u32, draft: NoteDraft) -> Self {
//!         Self { id, body: draft.body }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Create the backend and its client
//!     let (store, client) = MemoryStore::<Note>::new(10);
//!
//!     // 2. Run the backend
//!     tokio::spawn(store.run());
//!
//!     // 3. Use the client
//!     let created = client.create(NoteDraft { body: "hello".into() }).await.unwrap();
//!     assert_eq!(created.id, 1);
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation resolves to `Result<…, `[`StoreError`]`>`; the taxonomy
//! separates transport failures, server rejections, and vanished records so
//! callers can phrase each one for the user.
//!
//! ## Testing
//!
//! See the [`mock`] module for the expectation-queue [`mock::MockStore`] and
//! the channel helpers used to assert request payloads.

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod message;
pub mod mock;
pub mod resource;
pub mod tracing;

// Re-export core types for convenience
pub use client::StoreClient;
pub use error::StoreError;
pub use http::{HttpStore, StoreConfig, DEFAULT_BASE_URL};
pub use memory::MemoryStore;
pub use message::{Reply, StoreRequest};
pub use resource::Resource;
