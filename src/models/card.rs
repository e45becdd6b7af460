//! The merged, localized record produced by a search.
//!
//! Every slice except the primary subject fields is best-effort: a failed
//! secondary fetch leaves its slice empty or `None`, and the renderer shows a
//! placeholder.

use serde::{Deserialize, Serialize};

use super::{EvolutionNode, TypeTag};

/// A fully aggregated Pokémon card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonCard {
    pub id: u32,
    /// Canonical English slug.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    /// Type slugs in slot order.
    pub types: Vec<String>,
    pub stats: Vec<StatValue>,
    pub base_stat_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    pub abilities: Vec<AbilityInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hatch_counter: Option<u32>,
    /// Pre-order evolution tree. `None` when species or chain data is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution: Option<Vec<EvolutionNode>>,
    pub encounters: Vec<EncounterInfo>,
    pub level_up_moves: Vec<MoveInfo>,
    pub machine_moves: Vec<MoveInfo>,
    pub type_effectiveness: Vec<TypeMultiplier>,
}

impl PokemonCard {
    /// Localized name, falling back to the slug.
    pub fn display_name(&self) -> &str {
        self.localized_name.as_deref().unwrap_or(&self.name)
    }

    /// Base stat by stat slug.
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityInfo {
    /// Raw ability slug.
    pub slug: String,
    pub name: String,
    pub is_hidden: bool,
    pub description: String,
}

/// Encounters in one location area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterInfo {
    /// Raw location-area slug.
    pub area: String,
    pub location: String,
    pub versions: Vec<VersionEncounter>,
}

impl EncounterInfo {
    /// The first version entry, which is what the card's table shows.
    pub fn primary(&self) -> Option<&VersionEncounter> {
        self.versions.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEncounter {
    pub version: String,
    pub max_chance: u32,
    pub methods: Vec<EncounterMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMethod {
    pub method: String,
    pub min_level: u32,
    pub max_level: u32,
}

/// Damage category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageCategory {
    Physical,
    Special,
    Status,
}

impl DamageCategory {
    /// Maps the API's `damage_class` slug. Anything unknown counts as status.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "physical" => DamageCategory::Physical,
            "special" => DamageCategory::Special,
            _ => DamageCategory::Status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    /// Raw move slug.
    pub slug: String,
    pub name: String,
    /// Only set for level-up moves.
    pub level: Option<u32>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    /// Type slug. `None` when the move detail could not be fetched.
    pub kind: Option<String>,
    pub category: Option<DamageCategory>,
    /// Localized category label.
    pub category_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeMultiplier {
    #[serde(rename = "type")]
    pub tag: TypeTag,
    pub multiplier: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_category_from_slug() {
        assert_eq!(DamageCategory::from_slug("physical"), DamageCategory::Physical);
        assert_eq!(DamageCategory::from_slug("special"), DamageCategory::Special);
        assert_eq!(DamageCategory::from_slug("status"), DamageCategory::Status);
    }

    #[test]
    fn test_type_multiplier_serializes_type_key() {
        let m = TypeMultiplier {
            tag: TypeTag::Fire,
            multiplier: 2.0,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"type\":\"fire\""));
        assert!(json.contains("\"multiplier\":2.0"));
    }
}
