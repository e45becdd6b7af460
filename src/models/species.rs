//! Secondary resources: species, abilities, moves, types, encounters and
//! location areas.

use serde::{Deserialize, Serialize};

use super::{FlavorText, LocalizedName, NamedResource};

/// `/pokemon-species/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    /// Chance of being female in eighths; -1 for genderless.
    #[serde(default)]
    pub gender_rate: Option<i32>,
    #[serde(default)]
    pub capture_rate: Option<u32>,
    #[serde(default)]
    pub hatch_counter: Option<u32>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

/// An unnamed `{ url }` link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// `/ability/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// `/move/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
    pub damage_class: NamedResource,
}

/// `/type/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDetail {
    pub damage_relations: DamageRelations,
}

/// Incoming damage relations of a type. Outgoing relations are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

/// One entry of `/pokemon/{id}/encounters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    pub location_area: NamedResource,
    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEncounterDetail {
    pub max_chance: u32,
    pub version: NamedResource,
    #[serde(default)]
    pub encounter_details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterDetail {
    pub method: NamedResource,
    pub min_level: u32,
    pub max_level: u32,
}

/// `/location-area/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}
