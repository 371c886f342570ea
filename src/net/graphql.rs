//! Minimal GraphQL-over-HTTP client with a per-operation result cache.
//!
//! ERROR HANDLING
//! ==============
//! Every failure class gets its own [`GraphqlError`] variant so callers can
//! log the detail while deciding how much to show the user. Nothing in this
//! module panics; SSR builds get `Unavailable` instead of a network stack.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Failure classes for a GraphQL round-trip.
#[derive(Clone, Debug, thiserror::Error)]
pub enum GraphqlError {
    /// The HTTP request itself failed (network down, DNS, CORS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with an `errors` array.
    #[error("operation rejected: {0}")]
    Server(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Not running in a browser (SSR build).
    #[error("not available outside the browser")]
    Unavailable,
}

/// Cache of raw `data` payloads keyed by operation name.
///
/// Shared by clone — the login flow resets it through its own clone of the
/// client so every reader sees fresh data after a session change.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl QueryCache {
    /// A poisoned lock degrades to a cache miss rather than a panic.
    #[must_use]
    pub fn lookup(&self, operation: &str) -> Option<serde_json::Value> {
        self.entries.lock().ok()?.get(operation).cloned()
    }

    pub fn insert(&self, operation: &str, data: serde_json::Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(operation.to_owned(), data);
        }
    }

    /// Drop every cached result so subsequent queries hit the network.
    pub fn reset(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().map_or(true, |entries| entries.is_empty())
    }
}

/// GraphQL client bound to a single endpoint.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    endpoint: String,
    cache: QueryCache,
}

impl GraphqlClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cache: QueryCache::default(),
        }
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Run a query, serving a cached result for the operation if one exists.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphqlError`] when the request fails, the server rejects
    /// the operation, or the response cannot be decoded.
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &str,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, GraphqlError> {
        if let Some(hit) = self.cache.lookup(operation) {
            return decode_data(hit);
        }
        let data = self.execute(document, variables).await?;
        self.cache.insert(operation, data.clone());
        decode_data(data)
    }

    /// Run a mutation. Mutation results are never cached.
    ///
    /// # Errors
    ///
    /// Same failure classes as [`GraphqlClient::query`].
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, GraphqlError> {
        let data = self.execute(document, variables).await?;
        decode_data(data)
    }

    /// POST the `{query, variables}` envelope and return the `data` payload.
    #[cfg(feature = "hydrate")]
    async fn execute(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GraphqlError> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| GraphqlError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GraphqlError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(GraphqlError::Transport(format!(
                "status {}",
                resp.status()
            )));
        }
        let envelope: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| GraphqlError::Decode(e.to_string()))?;
        decode_envelope(envelope)
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    async fn execute(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GraphqlError> {
        let _ = (document, variables);
        Err(GraphqlError::Unavailable)
    }
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// Split a `{data, errors}` envelope into its `data` payload.
///
/// An `errors` array wins over any partial `data`; a rejected operation is
/// an error even when the server also returned fields.
pub(crate) fn decode_envelope(
    envelope: serde_json::Value,
) -> Result<serde_json::Value, GraphqlError> {
    #[derive(Deserialize)]
    struct Envelope {
        #[serde(default)]
        data: Option<serde_json::Value>,
        #[serde(default)]
        errors: Option<Vec<ErrorEntry>>,
    }

    let envelope: Envelope = serde_json::from_value(envelope)
        .map_err(|e| GraphqlError::Decode(e.to_string()))?;
    if let Some(errors) = envelope.errors {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GraphqlError::Server(joined));
    }
    envelope
        .data
        .ok_or_else(|| GraphqlError::Decode("missing data".to_owned()))
}

pub(crate) fn decode_data<T: DeserializeOwned>(
    data: serde_json::Value,
) -> Result<T, GraphqlError> {
    serde_json::from_value(data).map_err(|e| GraphqlError::Decode(e.to_string()))
}
