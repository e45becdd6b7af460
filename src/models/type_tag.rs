//! The 18 elemental types that take part in damage calculation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Elemental type tag, serialized as the API slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Steel,
    Fairy,
    Dark,
}

impl TypeTag {
    /// All tags in display order.
    pub fn all() -> &'static [TypeTag] {
        &[
            TypeTag::Normal,
            TypeTag::Fire,
            TypeTag::Water,
            TypeTag::Electric,
            TypeTag::Grass,
            TypeTag::Ice,
            TypeTag::Fighting,
            TypeTag::Poison,
            TypeTag::Ground,
            TypeTag::Flying,
            TypeTag::Psychic,
            TypeTag::Bug,
            TypeTag::Rock,
            TypeTag::Ghost,
            TypeTag::Dragon,
            TypeTag::Steel,
            TypeTag::Fairy,
            TypeTag::Dark,
        ]
    }

    /// API slug (`"fire"`).
    pub fn slug(&self) -> &'static str {
        match self {
            TypeTag::Normal => "normal",
            TypeTag::Fire => "fire",
            TypeTag::Water => "water",
            TypeTag::Electric => "electric",
            TypeTag::Grass => "grass",
            TypeTag::Ice => "ice",
            TypeTag::Fighting => "fighting",
            TypeTag::Poison => "poison",
            TypeTag::Ground => "ground",
            TypeTag::Flying => "flying",
            TypeTag::Psychic => "psychic",
            TypeTag::Bug => "bug",
            TypeTag::Rock => "rock",
            TypeTag::Ghost => "ghost",
            TypeTag::Dragon => "dragon",
            TypeTag::Steel => "steel",
            TypeTag::Fairy => "fairy",
            TypeTag::Dark => "dark",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::all()
            .iter()
            .copied()
            .find(|tag| tag.slug() == s)
            .ok_or_else(|| format!("Unknown type '{}'", s))
    }
}
