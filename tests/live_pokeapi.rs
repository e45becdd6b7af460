//! Smoke tests against the real PokéAPI.
//!
//! These tests need network access.
//! Run with: `cargo test --features live --test live_pokeapi`

#![cfg(feature = "live")]

use dexcard::api::backends::HttpFetcher;
use dexcard::config::Config;
use dexcard::context::Context;
use dexcard::locale::Labels;
use dexcard::names::NameIndex;
use dexcard::services::SearchService;
use dexcard::FromRef;

fn service() -> SearchService {
    let config = Config::default();
    let fetcher = HttpFetcher::new(&config.api).expect("Failed to build HTTP client");
    let names = NameIndex::from_pairs([("피카츄", 25)]);
    let ctx = Context::new(fetcher, config, names, Labels::korean());
    SearchService::from_ref(&ctx)
}

#[tokio::test]
async fn test_id_and_names_agree() {
    let service = service();
    let by_id = service.resolve("25").await.expect("Search by id failed");
    let by_slug = service.resolve("pikachu").await.expect("Search by slug failed");
    let by_korean = service.resolve("피카츄").await.expect("Search by Korean name failed");

    assert_eq!(by_id.id, 25);
    assert_eq!(by_slug.id, 25);
    assert_eq!(by_korean.id, 25);
    assert_eq!(by_id.localized_name.as_deref(), Some("피카츄"));
}

#[tokio::test]
async fn test_branching_chain_covers_every_node() {
    let card = service().resolve("eevee").await.expect("Search failed");
    let evolution = card.evolution.expect("Eevee has an evolution chain");

    assert!(evolution.len() > 2);
    assert_eq!(evolution[0].name, "eevee");
    assert!(evolution[1..].iter().all(|n| n.condition.is_some()));
}

#[tokio::test]
async fn test_species_names_csv_builds_index() {
    let config = Config::default();
    let fetcher = HttpFetcher::new(&config.api).expect("Failed to build HTTP client");
    let csv = fetcher
        .fetch_text(&config.names.csv_url)
        .await
        .expect("Failed to download CSV");

    let index = NameIndex::from_csv(csv.as_bytes(), config.names.language_id).expect("Bad CSV");
    assert_eq!(index.lookup("이상해씨"), Some(1));
    assert_eq!(index.lookup("피카츄"), Some(25));
}
