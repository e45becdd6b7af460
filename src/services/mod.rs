//! Services that turn PokéAPI resources into a card.
//!
//! Services are built from the [`Context`](crate::context::Context) with the
//! `FromContext` derive macro.

mod evolution;
mod fallback;
mod matchup;
mod moves;
mod search;

pub use evolution::{describe_condition, plan, EvolutionService, PlannedNode};
pub use matchup::type_effectiveness;
pub use moves::{move_info, sort_level_up, sort_machine, MovePlan};
pub use search::SearchService;
