//! Search service: resolves a search term into a fully aggregated card.

use futures::future::join_all;

use crate::api::PokeApi;
use crate::context::{AppConfig, AppLabels, AppNames, Context};
use crate::di::FromContext;
use crate::error::SearchError;
use crate::locale::Labels;
use crate::models::{
    fold_flavor_text, localized_flavor, localized_name, Ability, AbilityInfo, Encounter,
    EncounterInfo, EncounterMethod, EvolutionChain, LocationArea, Move, MoveInfo, Pokemon,
    PokemonAbility, PokemonCard, PokemonType, Species, StatValue, TypeDetail, TypeMultiplier,
    VersionEncounter,
};
use crate::names::normalize_term;

use super::evolution::EvolutionService;
use super::fallback::{settle, settle_or_default};
use super::matchup::type_effectiveness;
use super::moves::{move_info, sort_level_up, sort_machine, MovePlan};

/// Aggregates every PokéAPI resource needed for one card.
///
/// Only the primary `/pokemon` lookup can fail a search. Everything fetched
/// after it is best-effort: a failed request is logged and its slice of the
/// card is left empty or filled with a fallback.
#[derive(FromContext, Clone)]
pub struct SearchService {
    api: PokeApi,
    evolution: EvolutionService,
    names: AppNames,
    config: AppConfig,
    labels: AppLabels,
}

impl SearchService {
    /// Maps a raw term to the key used for the primary lookup: the dex id if
    /// the normalized term is a known localized name, else the normalized
    /// term itself (ids and English slugs are accepted by the API as-is).
    pub fn lookup_key(&self, term: &str) -> Result<String, SearchError> {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        Ok(match self.names.lookup(&normalized) {
            Some(id) => {
                tracing::debug!(term = %normalized, id, "Matched localized name");
                id.to_string()
            }
            None => normalized,
        })
    }

    /// Resolves a search term into a card.
    pub async fn resolve(&self, term: &str) -> Result<PokemonCard, SearchError> {
        let key = self.lookup_key(term)?;
        tracing::info!(term = term.trim(), key = %key, "Searching");

        let pokemon = self.api.pokemon(&key).await.map_err(|source| {
            tracing::warn!(key = %key, error = %source, "Primary lookup failed");
            SearchError::NotFound {
                term: term.trim().to_string(),
                source,
            }
        })?;

        let card = self.enrich(pokemon).await;
        tracing::info!(
            id = card.id,
            name = %card.name,
            evolution = card.evolution.as_ref().map_or(0, Vec::len),
            encounters = card.encounters.len(),
            moves = card.level_up_moves.len() + card.machine_moves.len(),
            "Search complete"
        );
        Ok(card)
    }

    /// Fetches and merges all secondary data for `pokemon`. Never fails.
    pub async fn enrich(&self, pokemon: Pokemon) -> PokemonCard {
        let mut card = base_card(&pokemon);

        // Species, encounters and abilities only need the primary record.
        let (species, encounters, abilities) = tokio::join!(
            async { settle("species", self.api.species(pokemon.id).await) },
            async { settle_or_default("encounters", self.api.encounters(pokemon.id).await) },
            self.abilities(&pokemon.abilities),
        );
        card.abilities = abilities;

        // The chain URL is only known once species data is in.
        if let Some(species) = &species {
            self.apply_species(&mut card, species).await;
        }

        let (encounters, (level_up, machine), effectiveness) = tokio::join!(
            self.encounters(encounters),
            self.moves(&pokemon),
            self.type_effectiveness(&pokemon.types),
        );
        card.encounters = encounters;
        card.level_up_moves = level_up;
        card.machine_moves = machine;
        card.type_effectiveness = effectiveness;

        card
    }

    fn language(&self) -> &str {
        &self.config.search.language
    }

    async fn apply_species(&self, card: &mut PokemonCard, species: &Species) {
        let language = self.language();
        card.localized_name = localized_name(&species.names, language).map(str::to_string);
        card.description = localized_flavor(&species.flavor_text_entries, language).map(fold_flavor_text);
        card.gender_rate = species.gender_rate;
        card.capture_rate = species.capture_rate;
        card.hatch_counter = species.hatch_counter;

        let Some(chain_ref) = species.evolution_chain.as_ref().filter(|c| !c.url.is_empty()) else {
            return;
        };
        if let Some(chain) = settle(
            "evolution chain",
            self.api.resource::<EvolutionChain>(&chain_ref.url).await,
        ) {
            card.evolution = Some(self.evolution.resolve(&chain.chain).await);
        }
    }

    /// One entry per ability, in the subject's order. Each future carries its
    /// own ability reference, so the hidden flag cannot drift to another slot.
    async fn abilities(&self, abilities: &[PokemonAbility]) -> Vec<AbilityInfo> {
        let language = self.language();
        let lookups = abilities.iter().map(|entry| async move {
            let detail = settle("ability", self.api.resource::<Ability>(&entry.ability.url).await);
            ability_info(entry, detail.as_ref(), language, &self.labels)
        });
        join_all(lookups).await
    }

    /// Localizes the first `max_encounters` location areas. Each lookup is
    /// paired with its own encounter record inside the future.
    async fn encounters(&self, encounters: Vec<Encounter>) -> Vec<EncounterInfo> {
        let language = self.language();
        let total = encounters.len();
        let retained: Vec<Encounter> = encounters
            .into_iter()
            .take(self.config.search.max_encounters)
            .collect();
        if total > retained.len() {
            tracing::debug!(total, kept = retained.len(), "Truncated encounter list");
        }

        let lookups = retained.iter().map(|encounter| async move {
            let area = settle(
                "location area",
                self.api
                    .resource::<LocationArea>(&encounter.location_area.url)
                    .await,
            );
            encounter_info(encounter, area.as_ref(), language)
        });
        join_all(lookups).await
    }

    /// Level-up and machine lists. Both capped sets go out as one batch and
    /// are split back by the level-up count.
    async fn moves(&self, pokemon: &Pokemon) -> (Vec<MoveInfo>, Vec<MoveInfo>) {
        let language = self.language();
        let plan = MovePlan::new(&pokemon.moves, self.config.search.max_moves);
        if plan.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let level_count = plan.level_up.len();
        tracing::debug!(total = plan.len(), level_up = level_count, "Fetching move details");

        let lookups = plan.batch().enumerate().map(|(index, entry)| async move {
            let detail = settle("move", self.api.resource::<Move>(&entry.move_ref.url).await);
            move_info(entry, detail.as_ref(), index < level_count, language, &self.labels)
        });
        let mut level_up = join_all(lookups).await;
        let mut machine = level_up.split_off(level_count.min(level_up.len()));

        sort_level_up(&mut level_up);
        sort_machine(&mut machine);
        (level_up, machine)
    }

    async fn type_effectiveness(&self, types: &[PokemonType]) -> Vec<TypeMultiplier> {
        let lookups = types.iter().map(|t| async move {
            let url = if t.kind.url.is_empty() {
                self.api.endpoint(&format!("type/{}", t.kind.name))
            } else {
                t.kind.url.clone()
            };
            settle("type", self.api.resource::<TypeDetail>(&url).await)
        });
        let relations: Vec<_> = join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .map(|detail| detail.damage_relations)
            .collect();

        type_effectiveness(&relations)
    }
}

/// Card fields that come straight from the primary record.
fn base_card(pokemon: &Pokemon) -> PokemonCard {
    PokemonCard {
        id: pokemon.id,
        name: pokemon.name.clone(),
        localized_name: None,
        description: None,
        height: pokemon.height,
        weight: pokemon.weight,
        types: pokemon.types.iter().map(|t| t.kind.name.clone()).collect(),
        stats: pokemon
            .stats
            .iter()
            .map(|s| StatValue {
                name: s.stat.name.clone(),
                value: s.base_stat,
            })
            .collect(),
        base_stat_total: pokemon.base_stat_total(),
        artwork_url: pokemon.artwork_url().map(str::to_string),
        abilities: Vec::new(),
        gender_rate: None,
        capture_rate: None,
        hatch_counter: None,
        evolution: None,
        encounters: Vec::new(),
        level_up_moves: Vec::new(),
        machine_moves: Vec::new(),
        type_effectiveness: Vec::new(),
    }
}

fn ability_info(
    entry: &PokemonAbility,
    detail: Option<&Ability>,
    language: &str,
    labels: &Labels,
) -> AbilityInfo {
    let slug = entry.ability.name.clone();
    let name = detail
        .and_then(|d| localized_name(&d.names, language))
        .map(str::to_string)
        .unwrap_or_else(|| slug.clone());
    let description = detail
        .and_then(|d| localized_flavor(&d.flavor_text_entries, language))
        .map(|text| text.replace('\u{000c}', " "))
        .unwrap_or_else(|| labels.no_description.clone());

    AbilityInfo {
        slug,
        name,
        is_hidden: entry.is_hidden,
        description,
    }
}

fn encounter_info(encounter: &Encounter, area: Option<&LocationArea>, language: &str) -> EncounterInfo {
    let location = area
        .and_then(|a| localized_name(&a.names, language))
        .map(str::to_string)
        .unwrap_or_else(|| encounter.location_area.spaced_name());

    EncounterInfo {
        area: encounter.location_area.name.clone(),
        location,
        versions: encounter
            .version_details
            .iter()
            .map(|v| VersionEncounter {
                version: v.version.name.clone(),
                max_chance: v.max_chance,
                methods: v
                    .encounter_details
                    .iter()
                    .map(|d| EncounterMethod {
                        method: d.method.name.clone(),
                        min_level: d.min_level,
                        max_level: d.max_level,
                    })
                    .collect(),
            })
            .collect(),
    }
}
