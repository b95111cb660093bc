//! # HTTP Backend
//!
//! This module defines the `HttpStore`, a backend that serves the store
//! protocol against a REST collection: `GET`/`POST` on
//! `{base}/{collection}` and `PUT`/`DELETE` on `{base}/{collection}/{id}`,
//! all bodies JSON.
//!
//! Unlike the in-process backend, requests here are not handled
//! sequentially: each one runs in its own task with a cheap clone of the
//! `reqwest` client, so a slow response never delays later requests and
//! completions may arrive in any order. The oneshot reply channels route
//! every completion back to its caller regardless.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::resource::Resource;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Development address of the remote store.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// HTTP backend configuration.
///
/// The base address is the only deployment-specific setting in the whole
/// system; everything else about the wire contract is fixed.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base address of the remote store.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables.
    ///
    /// - `REMOTE_STORE_URL`: Optional base address (default: `http://localhost:3001`)
    /// - `REMOTE_STORE_TIMEOUT`: Optional timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = std::env::var("REMOTE_STORE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("REMOTE_STORE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Set the base address.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP store backend for a single collection.
///
/// Serves the same protocol as [`MemoryStore`](crate::memory::MemoryStore)
/// behind the same [`StoreClient`], so components never know which backend
/// they talk to.
pub struct HttpStore<R: Resource> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    client: Client,
    collection_url: String,
}

impl<R> HttpStore<R>
where
    R: Resource + Serialize + DeserializeOwned,
    R::Draft: Serialize,
{
    /// Creates a new `HttpStore` and its associated `StoreClient`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Config`] if the base address is empty or the underlying
    /// HTTP client cannot be built.
    pub fn new(
        config: StoreConfig,
        buffer_size: usize,
    ) -> Result<(Self, StoreClient<R>), StoreError> {
        if config.base_url.is_empty() {
            return Err(StoreError::Config(
                "store base address not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            client,
            collection_url: collection_url(&config.base_url, R::COLLECTION),
        };
        Ok((store, StoreClient::new(sender)))
    }

    /// Runs the backend loop, dispatching requests until the channel closes.
    ///
    /// Each request is served in a task of its own; the loop only forwards.
    pub async fn run(mut self) {
        let resource = R::COLLECTION;
        info!(resource, url = %self.collection_url, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            let client = self.client.clone();
            let url = self.collection_url.clone();
            tokio::spawn(async move {
                match msg {
                    StoreRequest::List { respond_to } => {
                        let _ = respond_to.send(list::<R>(&client, &url).await);
                    }
                    StoreRequest::Create { draft, respond_to } => {
                        let _ = respond_to.send(create::<R>(&client, &url, draft).await);
                    }
                    StoreRequest::Update {
                        id,
                        record,
                        respond_to,
                    } => {
                        let _ = respond_to.send(update::<R>(&client, &url, id, record).await);
                    }
                    StoreRequest::Delete { id, respond_to } => {
                        let _ = respond_to.send(delete::<R>(&client, &url, id).await);
                    }
                }
            });
        }

        info!(resource, "Shutdown");
    }
}

async fn list<R: Resource + DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Vec<R>, StoreError> {
    debug!(%url, "GET collection");
    let response = client.get(url).send().await.map_err(transport)?;
    read_json(response).await
}

async fn create<R>(client: &Client, url: &str, draft: R::Draft) -> Result<R, StoreError>
where
    R: Resource + DeserializeOwned,
    R::Draft: Serialize,
{
    debug!(%url, "POST record");
    let response = client
        .post(url)
        .json(&draft)
        .send()
        .await
        .map_err(transport)?;
    read_json(response).await
}

async fn update<R>(client: &Client, url: &str, id: R::Id, record: R) -> Result<R, StoreError>
where
    R: Resource + Serialize + DeserializeOwned,
{
    let url = format!("{url}/{id}");
    debug!(%url, "PUT record");
    let response = client
        .put(&url)
        .json(&record)
        .send()
        .await
        .map_err(transport)?;
    let status = response.status();
    if let Some(e) = keyed_status_error(status, &id) {
        warn!(%id, %status, "Request failed");
        return Err(e);
    }
    response.json().await.map_err(transport)
}

async fn delete<R: Resource>(client: &Client, url: &str, id: R::Id) -> Result<(), StoreError> {
    let url = format!("{url}/{id}");
    debug!(%url, "DELETE record");
    let response = client.delete(&url).send().await.map_err(transport)?;
    let status = response.status();
    if let Some(e) = keyed_status_error(status, &id) {
        warn!(%id, %status, "Request failed");
        return Err(e);
    }
    Ok(())
}

/// Maps the response status of a keyed operation (`PUT`/`DELETE`): 404 names
/// the id that vanished, any other non-success is a plain rejection, `None`
/// is success.
fn keyed_status_error(status: StatusCode, id: impl ToString) -> Option<StoreError> {
    if status == StatusCode::NOT_FOUND {
        return Some(StoreError::NotFound(id.to_string()));
    }
    if !status.is_success() {
        return Some(StoreError::Rejected(status.as_u16()));
    }
    None
}

/// Decode a JSON body after checking the status code.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Rejected(status.as_u16()));
    }
    response.json().await.map_err(transport)
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

/// Join the base address and collection segment, tolerating a trailing slash
/// on the configured base.
fn collection_url(base: &str, collection: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), collection)
}
