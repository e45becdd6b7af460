//! Evolution chains: the raw `/evolution-chain/{id}` tree and the resolved
//! display nodes.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Trigger slug for trade evolutions.
pub const TRIGGER_TRADE: &str = "trade";

/// `/evolution-chain/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// A node of the evolution tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
    /// Alternative ways to reach this node from its parent.
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
}

impl ChainLink {
    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.evolves_to.iter().map(ChainLink::node_count).sum::<usize>()
    }
}

/// One set of trigger conditions. Every present field must hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionDetail {
    pub min_level: Option<u32>,
    pub item: Option<NamedResource>,
    pub min_happiness: Option<u32>,
    pub held_item: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    pub location: Option<NamedResource>,
    /// `"day"`, `"night"`, or empty when unrestricted.
    pub time_of_day: Option<String>,
    pub trigger: Option<NamedResource>,
}

/// A resolved evolution step, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub id: u32,
    /// Raw species slug.
    pub name: String,
    pub localized_name: String,
    pub artwork_url: String,
    /// How this node is reached from its parent. `None` for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}
