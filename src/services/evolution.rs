//! Evolution tree resolution.

use futures::future::join_all;

use crate::api::PokeApi;
use crate::context::{AppConfig, AppLabels, Context};
use crate::di::FromContext;
use crate::locale::Labels;
use crate::models::{localized_name, ChainLink, EvolutionDetail, EvolutionNode, Species, TRIGGER_TRADE};

use super::fallback::settle;

/// Resolves an evolution chain into localized display nodes.
#[derive(FromContext, Clone)]
pub struct EvolutionService {
    api: PokeApi,
    config: AppConfig,
    labels: AppLabels,
}

/// A node scheduled for resolution, with the condition of its incoming edge.
#[derive(Debug)]
pub struct PlannedNode<'a> {
    pub link: &'a ChainLink,
    pub condition: Option<String>,
}

impl EvolutionService {
    /// Walks the chain depth-first and returns one node per species, in
    /// pre-order.
    ///
    /// The traversal itself does no I/O; the species lookups for all nodes
    /// are then issued together and matched back by plan position, so the
    /// output order is the traversal order. A failed lookup falls back to the
    /// raw species name.
    pub async fn resolve(&self, root: &ChainLink) -> Vec<EvolutionNode> {
        let plan = plan(root, &self.labels);
        let language = self.config.search.language.as_str();

        let lookups = plan.iter().map(|node| async move {
            settle(
                "evolution species",
                self.api.resource::<Species>(&node.link.species.url).await,
            )
        });
        let species = join_all(lookups).await;

        plan.into_iter()
            .zip(species)
            .map(|(node, species)| {
                let slug = &node.link.species.name;
                let id = node.link.species.id().unwrap_or_else(|| {
                    tracing::warn!(species = %slug, "Species URL has no numeric id");
                    0
                });
                let localized = species
                    .as_ref()
                    .and_then(|s| localized_name(&s.names, language))
                    .map(str::to_string)
                    .unwrap_or_else(|| slug.clone());

                EvolutionNode {
                    id,
                    name: slug.clone(),
                    localized_name: localized,
                    artwork_url: self.api.artwork_url(id),
                    condition: node.condition,
                }
            })
            .collect()
    }
}

/// Pre-order traversal with an explicit stack. Children are pushed in reverse
/// so the first child is visited first.
pub fn plan<'a>(root: &'a ChainLink, labels: &Labels) -> Vec<PlannedNode<'a>> {
    let mut out = Vec::with_capacity(root.node_count());
    let mut stack = vec![PlannedNode {
        link: root,
        condition: None,
    }];

    while let Some(node) = stack.pop() {
        for child in node.link.evolves_to.iter().rev() {
            stack.push(PlannedNode {
                link: child,
                condition: child
                    .evolution_details
                    .first()
                    .map(|detail| describe_condition(detail, labels)),
            });
        }
        out.push(node);
    }

    out
}

/// Human-readable text for one evolution condition entry.
///
/// Present fields are joined in a fixed order; an entry with none of them is
/// the generic special-condition label.
pub fn describe_condition(detail: &EvolutionDetail, labels: &Labels) -> String {
    let l = &labels.evolution;
    let mut parts: Vec<String> = Vec::new();

    if let Some(level) = detail.min_level {
        parts.push(format!("{} {}", l.level_prefix, level));
    }
    if let Some(item) = &detail.item {
        parts.push(format!("{} {}", item.name, l.use_item));
    }
    if let Some(happiness) = detail.min_happiness {
        parts.push(format!("{} {}↑", l.friendship, happiness));
    }
    if let Some(held) = &detail.held_item {
        parts.push(format!("{} {}", held.name, l.hold_item));
    }
    if let Some(known) = &detail.known_move {
        parts.push(format!("{} {}", known.name, l.knows_move));
    }
    if let Some(location) = &detail.location {
        parts.push(format!("{} {}", location.name, l.near_location));
    }
    match detail.time_of_day.as_deref() {
        None | Some("") => {}
        Some("day") => parts.push(l.day.clone()),
        Some(_) => parts.push(l.night.clone()),
    }
    if detail
        .trigger
        .as_ref()
        .is_some_and(|t| t.name == TRIGGER_TRADE)
    {
        parts.push(l.trade.clone());
    }

    if parts.is_empty() {
        l.special.clone()
    } else {
        parts.join(&l.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::backends::FixtureFetcher;
    use crate::config::Config;
    use crate::di::FromRef;
    use crate::models::NamedResource;
    use serde_json::json;

    fn res(name: &str) -> Option<NamedResource> {
        Some(NamedResource {
            name: name.to_string(),
            url: String::new(),
        })
    }

    fn link(name: &str, id: u32, details: Vec<EvolutionDetail>, children: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            species: NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
            },
            evolves_to: children,
            evolution_details: details,
        }
    }

    fn level(n: u32) -> Vec<EvolutionDetail> {
        vec![EvolutionDetail {
            min_level: Some(n),
            trigger: res("level-up"),
            ..Default::default()
        }]
    }

    fn species_json(ko: &str) -> serde_json::Value {
        json!({
            "names": [{ "name": ko, "language": { "name": "ko", "url": "" } }],
            "flavor_text_entries": [],
            "gender_rate": 1,
            "capture_rate": 45,
            "hatch_counter": 20,
            "evolution_chain": null
        })
    }

    #[test]
    fn test_condition_level() {
        let labels = Labels::korean();
        assert_eq!(describe_condition(&level(16)[0], &labels), "Lv. 16");
    }

    #[test]
    fn test_condition_combined_fields_in_fixed_order() {
        let labels = Labels::korean();
        let detail = EvolutionDetail {
            min_happiness: Some(160),
            time_of_day: Some("night".to_string()),
            trigger: res("level-up"),
            ..Default::default()
        };
        assert_eq!(describe_condition(&detail, &labels), "친밀도 160↑ + 밤");

        let detail = EvolutionDetail {
            held_item: res("metal-coat"),
            trigger: res("trade"),
            ..Default::default()
        };
        assert_eq!(describe_condition(&detail, &labels), "metal-coat 지님 + 통신교환");

        let detail = EvolutionDetail {
            item: res("thunder-stone"),
            trigger: res("use-item"),
            time_of_day: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(describe_condition(&detail, &labels), "thunder-stone 사용");
    }

    #[test]
    fn test_condition_move_location_day() {
        let labels = Labels::korean();
        let detail = EvolutionDetail {
            known_move: res("ancient-power"),
            location: res("mt-coronet"),
            time_of_day: Some("day".to_string()),
            ..Default::default()
        };
        assert_eq!(
            describe_condition(&detail, &labels),
            "ancient-power 습득 + mt-coronet 부근 + 낮"
        );
    }

    #[test]
    fn test_condition_without_fields_is_special() {
        let labels = Labels::korean();
        let detail = EvolutionDetail {
            trigger: res("shed"),
            ..Default::default()
        };
        assert_eq!(describe_condition(&detail, &labels), "특수 조건");
    }

    #[test]
    fn test_plan_is_preorder_and_covers_every_node() {
        let labels = Labels::korean();
        // a -> (b -> (d, e), c)
        let root = link(
            "a",
            1,
            vec![],
            vec![
                link("b", 2, level(10), vec![link("d", 4, level(20), vec![]), link("e", 5, level(30), vec![])]),
                link("c", 3, level(15), vec![]),
            ],
        );

        let plan = plan(&root, &labels);
        let order: Vec<&str> = plan.iter().map(|n| n.link.species.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "d", "e", "c"]);
        assert_eq!(plan.len(), root.node_count());
        assert!(plan[0].condition.is_none());
        assert_eq!(plan[4].condition.as_deref(), Some("Lv. 15"));
    }

    #[test]
    fn test_plan_uses_first_detail_only_and_none_for_empty() {
        let labels = Labels::korean();
        let mut details = level(36);
        details.push(EvolutionDetail {
            item: res("moon-stone"),
            ..Default::default()
        });
        let root = link("x", 1, vec![], vec![link("y", 2, details, vec![]), link("z", 3, vec![], vec![])]);

        let plan = plan(&root, &labels);
        assert_eq!(plan[1].condition.as_deref(), Some("Lv. 36"));
        assert_eq!(plan[2].condition, None);
    }

    #[tokio::test]
    async fn test_resolve_localizes_and_falls_back() {
        let fetcher = FixtureFetcher::new()
            .with("https://pokeapi.co/api/v2/pokemon-species/1/", species_json("이상해씨"))
            .with("https://pokeapi.co/api/v2/pokemon-species/2/", species_json("이상해풀"))
            .with_status("https://pokeapi.co/api/v2/pokemon-species/3/", 500);
        let ctx = Context::for_fetcher(fetcher, Config::default());
        let service = EvolutionService::from_ref(&ctx);

        let root = link(
            "bulbasaur",
            1,
            vec![],
            vec![link("ivysaur", 2, level(16), vec![link("venusaur", 3, level(32), vec![])])],
        );

        let nodes = service.resolve(&root).await;
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].localized_name, "이상해씨");
        assert_eq!(nodes[0].condition, None);
        assert_eq!(nodes[1].localized_name, "이상해풀");
        assert_eq!(nodes[1].condition.as_deref(), Some("Lv. 16"));
        assert_eq!(nodes[2].localized_name, "venusaur");
        assert_eq!(nodes[2].id, 3);
        assert!(nodes[2].artwork_url.ends_with("/official-artwork/3.png"));
    }

    #[tokio::test]
    async fn test_resolve_single_node_chain() {
        let fetcher = FixtureFetcher::new()
            .with("https://pokeapi.co/api/v2/pokemon-species/128/", species_json("켄타로스"));
        let ctx = Context::for_fetcher(fetcher, Config::default());
        let service = EvolutionService::from_ref(&ctx);

        let nodes = service.resolve(&link("tauros", 128, vec![], vec![])).await;
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].localized_name, "켄타로스");
    }
}
