//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/dexcard/config.toml` (XDG) or platform config dir
//! 3. Project config: `.dexcard.toml`
//! 4. Environment variables: `DEXCARD_*`, nested with `__`
//!    (e.g. `DEXCARD_API__BASE_URL`)
//!
//! # Example
//!
//! ```toml
//! [api]
//! base_url = "https://pokeapi.co/api/v2"
//! timeout_secs = 10
//!
//! [names]
//! path = "/home/me/.local/share/dexcard/pokemon-names.json"
//!
//! [search]
//! language = "ko"
//! max_encounters = 10
//! max_moves = 15
//! ```

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub names: NamesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// PokéAPI endpoints and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// REST root, without trailing slash.
    pub base_url: String,
    /// Directory holding `{id}.png` official artwork.
    pub artwork_base_url: String,
    pub user_agent: String,
    /// Per-request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            artwork_base_url: "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork".to_string(),
            user_agent: concat!("dexcard/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

/// Name index location and the source used to build it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    /// JSON name index. Defaults to the platform data dir.
    pub path: Option<PathBuf>,
    /// PokéAPI species-names CSV.
    pub csv_url: String,
    /// `local_language_id` kept when building (3 = Korean).
    pub language_id: u32,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            path: None,
            csv_url: "https://raw.githubusercontent.com/PokeAPI/pokeapi/master/data/v2/csv/pokemon_species_names.csv".to_string(),
            language_id: 3,
        }
    }
}

impl NamesConfig {
    /// Configured path, or `<data dir>/dexcard/pokemon-names.json`.
    pub fn effective_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("dexcard")
                .join("pokemon-names.json"),
        }
    }
}

/// Search behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Language identifier used to pick localized names and flavor text.
    pub language: String,
    /// Location areas kept from the encounter list.
    pub max_encounters: usize,
    /// Moves kept per learn method before fetching details.
    pub max_moves: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            language: "ko".to_string(),
            max_encounters: 10,
            max_moves: 15,
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The layered provider chain used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(Self::user_config_path()))
            .merge(Toml::file(".dexcard.toml"))
            .merge(Env::prefixed("DEXCARD_").split("__"))
    }

    /// User config path: ~/.config/dexcard/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("dexcard").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("dexcard").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.search.language, "ko");
        assert_eq!(config.search.max_encounters, 10);
        assert_eq!(config.search.max_moves, 15);
        assert_eq!(config.names.language_id, 3);
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                ".dexcard.toml",
                r#"
                [search]
                max_moves = 5

                [api]
                base_url = "http://localhost:8080/api/v2"
                "#,
            )?;

            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.search.max_moves, 5);
            assert_eq!(config.search.max_encounters, 10);
            assert_eq!(config.api.base_url, "http://localhost:8080/api/v2");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".dexcard.toml", "[search]\nlanguage = \"ja\"\n")?;
            jail.set_env("DEXCARD_SEARCH__LANGUAGE", "en");
            jail.set_env("DEXCARD_API__TIMEOUT_SECS", "3");

            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.search.language, "en");
            assert_eq!(config.api.timeout_secs, Some(3));
            Ok(())
        });
    }

    #[test]
    fn test_names_effective_path_prefers_configured() {
        let names = NamesConfig {
            path: Some(PathBuf::from("/tmp/names.json")),
            ..NamesConfig::default()
        };
        assert_eq!(names.effective_path(), PathBuf::from("/tmp/names.json"));
    }
}
