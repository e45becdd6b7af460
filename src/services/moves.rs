//! Move list derivation: partitioning, localization and ordering.

use std::cmp::Ordering;

use crate::locale::Labels;
use crate::models::{
    localized_name, DamageCategory, Move, MoveInfo, PokemonMove, LEARN_LEVEL_UP, LEARN_MACHINE,
};

/// Moves to fetch, split by learn method and capped before any request.
#[derive(Debug)]
pub struct MovePlan<'a> {
    pub level_up: Vec<&'a PokemonMove>,
    pub machine: Vec<&'a PokemonMove>,
}

impl<'a> MovePlan<'a> {
    /// Keeps the first `cap` level-up moves and the first `cap` machine moves,
    /// in the subject's own move order. A move taught both ways is in both.
    pub fn new(moves: &'a [PokemonMove], cap: usize) -> Self {
        let level_up = moves
            .iter()
            .filter(|m| m.learned_by(LEARN_LEVEL_UP))
            .take(cap)
            .collect();
        let machine = moves
            .iter()
            .filter(|m| m.learned_by(LEARN_MACHINE))
            .take(cap)
            .collect();
        Self { level_up, machine }
    }

    /// Level-up moves followed by machine moves: the single fetch batch.
    pub fn batch(&self) -> impl Iterator<Item = &'a PokemonMove> + '_ {
        self.level_up.iter().chain(self.machine.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.level_up.len() + self.machine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the display entry for one move. `detail` is `None` when its fetch
/// failed; the entry then carries only the raw name and level.
pub fn move_info(
    entry: &PokemonMove,
    detail: Option<&Move>,
    with_level: bool,
    language: &str,
    labels: &Labels,
) -> MoveInfo {
    let slug = entry.move_ref.name.clone();
    let name = detail
        .and_then(|d| localized_name(&d.names, language))
        .map(str::to_string)
        .unwrap_or_else(|| slug.clone());
    let category = detail.map(|d| DamageCategory::from_slug(&d.damage_class.name));

    MoveInfo {
        slug,
        name,
        level: if with_level {
            entry.level_up_level()
        } else {
            None
        },
        power: detail.and_then(|d| d.power),
        accuracy: detail.and_then(|d| d.accuracy),
        kind: detail.map(|d| d.kind.name.clone()),
        category,
        category_label: category.map(|c| labels.category(c).to_string()),
    }
}

/// Level ascending (missing level sorts as 0), then name.
pub fn sort_level_up(moves: &mut [MoveInfo]) {
    moves.sort_by(|a, b| {
        a.level
            .unwrap_or(0)
            .cmp(&b.level.unwrap_or(0))
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

/// Name ascending.
pub fn sort_machine(moves: &mut [MoveInfo]) {
    moves.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Code-point order; for Hangul syllables this matches dictionary order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}
