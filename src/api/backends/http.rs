//! HTTP backend using reqwest.
//!
//! # Example
//!
//! ```ignore
//! use dexcard::api::backends::HttpFetcher;
//! use dexcard::api::ResourceFetcher;
//!
//! let fetcher = HttpFetcher::new(&config.api)?;
//! let json = fetcher.fetch_json("https://pokeapi.co/api/v2/pokemon/1").await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::api::ResourceFetcher;
use crate::config::ApiConfig;
use crate::error::AppError;

/// Fetches resources over HTTP.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client with the configured user agent and optional timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Downloads a text document (used for the species-names CSV).
    pub async fn fetch_text(&self, url: &str) -> Result<String, AppError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<JsonValue, AppError> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "Non-success response");
            return Err(AppError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| AppError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}
