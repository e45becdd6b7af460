//! Core trait for fetching PokéAPI resources.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// Fetches one JSON document by absolute URL.
///
/// This is the single seam between the services and the network. Backends
/// decide how a URL is resolved (HTTP, in-memory fixtures, ...); callers only
/// see JSON or an [`AppError`].
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetches and parses the document at `url`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Status`] for any non-2xx answer (404 included)
    /// - [`AppError::Http`] for transport failures
    /// - [`AppError::Decode`] when the body is not JSON
    async fn fetch_json(&self, url: &str) -> Result<JsonValue, AppError>;
}
