//! Domain models: PokéAPI resources and the aggregated card.

mod card;
mod evolution;
mod pokemon;
mod resource;
mod species;
mod type_tag;

pub use card::{
    AbilityInfo, DamageCategory, EncounterInfo, EncounterMethod, MoveInfo, PokemonCard,
    StatValue, TypeMultiplier, VersionEncounter,
};
pub use evolution::{ChainLink, EvolutionChain, EvolutionDetail, EvolutionNode, TRIGGER_TRADE};
pub use pokemon::{
    Artwork, OtherSprites, Pokemon, PokemonAbility, PokemonMove, PokemonStat, PokemonType,
    Sprites, VersionGroupDetail, LEARN_LEVEL_UP, LEARN_MACHINE,
};
pub use resource::{
    fold_flavor_text, localized_flavor, localized_name, FlavorText, LocalizedName, NamedResource,
};
pub use species::{
    Ability, ApiResource, DamageRelations, Encounter, EncounterDetail, LocationArea, Move,
    Species, TypeDetail, VersionEncounterDetail,
};
pub use type_tag::TypeTag;
