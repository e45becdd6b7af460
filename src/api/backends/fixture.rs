//! In-memory backend serving canned JSON by URL.
//!
//! Unknown URLs answer 404, and individual URLs can be made to fail with any
//! status. Every request is recorded so tests can assert on fan-out.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::api::ResourceFetcher;
use crate::error::AppError;

#[derive(Debug, Clone)]
enum Canned {
    Body(JsonValue),
    Status(u16),
}

/// Fixture-backed fetcher.
#[derive(Debug, Clone, Default)]
pub struct FixtureFetcher {
    responses: HashMap<String, Canned>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `url`.
    pub fn with(mut self, url: impl Into<String>, body: JsonValue) -> Self {
        self.insert(url, body);
        self
    }

    /// Answers `url` with a non-success status.
    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), Canned::Status(status));
        self
    }

    pub fn insert(&mut self, url: impl Into<String>, body: JsonValue) {
        self.responses.insert(url.into(), Canned::Body(body));
    }

    /// URLs requested so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// How many times `url` was requested.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|u| u.as_str() == url).count()
    }
}

#[async_trait]
impl ResourceFetcher for FixtureFetcher {
    async fn fetch_json(&self, url: &str) -> Result<JsonValue, AppError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(AppError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(AppError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_serves_canned_body() {
        let fetcher = FixtureFetcher::new().with("http://x/a", json!({"ok": true}));
        let body = fetcher.fetch_json("http://x/a").await.unwrap();
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_unknown_url_is_not_found() {
        let fetcher = FixtureFetcher::new();
        let err = fetcher.fetch_json("http://x/missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_status_override_and_request_log() {
        let fetcher = FixtureFetcher::new().with_status("http://x/boom", 500);
        let err = fetcher.fetch_json("http://x/boom").await.unwrap_err();
        assert!(matches!(err, AppError::Status { status: 500, .. }));
        assert_eq!(fetcher.request_count("http://x/boom"), 1);
    }
}
