//! Typed access to PokéAPI v2.
//!
//! # Architecture
//!
//! - [`ResourceFetcher`] - fetch one JSON document by URL (trait seam)
//! - [`backends`] - HTTP and in-memory implementations
//! - [`PokeApi`] - endpoint building and typed decoding on top of a fetcher
//!
//! # Usage
//!
//! ```ignore
//! let api = PokeApi::from_ref(&ctx);
//! let pokemon = api.pokemon("bulbasaur").await?;
//! let species = api.species(pokemon.id).await?;
//! let chain: EvolutionChain = api.resource(&species.evolution_chain.unwrap().url).await?;
//! ```

mod traits;

pub mod backends;

pub use traits::ResourceFetcher;

use serde::de::DeserializeOwned;

use crate::context::{AppConfig, AppFetcher, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Encounter, Pokemon, Species};

/// Typed PokéAPI client.
#[derive(FromContext, Clone)]
pub struct PokeApi {
    fetcher: AppFetcher,
    config: AppConfig,
}

impl PokeApi {
    /// Absolute URL for a path under the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetches and decodes the resource at `url`.
    pub async fn resource<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let json = self.fetcher.fetch_json(url).await?;
        serde_json::from_value(json).map_err(|e| AppError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// `/pokemon/{key}` where `key` is an id or an English slug.
    pub async fn pokemon(&self, key: &str) -> Result<Pokemon, AppError> {
        self.resource(&self.endpoint(&format!("pokemon/{}", key)))
            .await
    }

    /// `/pokemon-species/{id}`.
    pub async fn species(&self, id: u32) -> Result<Species, AppError> {
        self.resource(&self.endpoint(&format!("pokemon-species/{}", id)))
            .await
    }

    /// `/pokemon/{id}/encounters`.
    pub async fn encounters(&self, id: u32) -> Result<Vec<Encounter>, AppError> {
        self.resource(&self.endpoint(&format!("pokemon/{}/encounters", id)))
            .await
    }

    /// Official artwork URL for a species id.
    pub fn artwork_url(&self, id: u32) -> String {
        format!(
            "{}/{}.png",
            self.config.api.artwork_base_url.trim_end_matches('/'),
            id
        )
    }
}
