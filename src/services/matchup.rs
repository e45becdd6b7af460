//! Defensive type effectiveness.

use std::collections::HashMap;

use crate::models::{DamageRelations, TypeMultiplier, TypeTag};

/// Multiplies incoming damage relations of every own type into one chart.
///
/// Each of the 18 tags starts at 1; `double_damage_from` doubles,
/// `half_damage_from` halves and `no_damage_from` zeroes, compounding across
/// the given relations. Tags outside the fixed set are ignored. Neutral
/// entries are dropped and the rest sorted by multiplier, highest first, ties
/// keeping [`TypeTag::all`] order.
pub fn type_effectiveness(relations: &[DamageRelations]) -> Vec<TypeMultiplier> {
    let mut chart: HashMap<TypeTag, f64> = TypeTag::all().iter().map(|t| (*t, 1.0)).collect();

    let mut apply = |names: &[crate::models::NamedResource], factor: f64| {
        for name in names {
            if let Ok(tag) = name.name.parse::<TypeTag>() {
                if let Some(value) = chart.get_mut(&tag) {
                    *value *= factor;
                }
            }
        }
    };

    for relation in relations {
        apply(&relation.double_damage_from, 2.0);
        apply(&relation.half_damage_from, 0.5);
        apply(&relation.no_damage_from, 0.0);
    }

    let mut result: Vec<TypeMultiplier> = TypeTag::all()
        .iter()
        .filter_map(|tag| {
            let multiplier = chart[tag];
            (multiplier != 1.0).then_some(TypeMultiplier {
                tag: *tag,
                multiplier,
            })
        })
        .collect();

    result.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));
    result
}
