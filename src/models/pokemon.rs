//! The primary `/pokemon/{id or name}` resource.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Learn method slug for moves learned by leveling up.
pub const LEARN_LEVEL_UP: &str = "level-up";
/// Learn method slug for TM/HM moves.
pub const LEARN_MACHINE: &str = "machine";

/// A Pokémon as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    /// Sum of all base stats.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }

    /// Official artwork URL, if the API provides one.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites.other.official_artwork.front_default.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

impl PokemonMove {
    /// True if any version group teaches the move by `method`.
    pub fn learned_by(&self, method: &str) -> bool {
        self.version_group_details
            .iter()
            .any(|v| v.move_learn_method.name == method)
    }

    /// Level from the first level-up entry.
    pub fn level_up_level(&self) -> Option<u32> {
        self.version_group_details
            .iter()
            .find(|v| v.move_learn_method.name == LEARN_LEVEL_UP)
            .map(|v| v.level_learned_at)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionGroupDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}
