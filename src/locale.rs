//! Display labels for one locale.
//!
//! Labels are plain data built once at startup and shared through the
//! [`Context`](crate::context::Context). Nothing here is global.

use std::collections::HashMap;

use crate::models::{DamageCategory, TypeTag};

/// All user-facing strings the services and renderer need.
#[derive(Debug, Clone)]
pub struct Labels {
    pub type_names: HashMap<TypeTag, String>,
    pub physical: String,
    pub special: String,
    pub status: String,
    /// Suffixes and words for evolution conditions.
    pub evolution: EvolutionLabels,
    /// Fallback when an ability has no localized flavor text.
    pub no_description: String,
    /// Fallback when an encounter has no method.
    pub unknown_method: String,
    pub stat_names: Vec<(String, String)>,
    pub headings: Headings,
    pub placeholders: Placeholders,
}

#[derive(Debug, Clone)]
pub struct EvolutionLabels {
    pub level_prefix: String,
    pub use_item: String,
    pub friendship: String,
    pub hold_item: String,
    pub knows_move: String,
    pub near_location: String,
    pub day: String,
    pub night: String,
    pub trade: String,
    pub separator: String,
    /// Used when a condition entry has no recognised fields.
    pub special: String,
    /// Used when an edge has no condition entry at all.
    pub generic: String,
}

/// Section titles and column headers of the text card.
#[derive(Debug, Clone)]
pub struct Headings {
    pub stats: String,
    pub total: String,
    pub abilities: String,
    pub hidden_ability: String,
    pub height: String,
    pub weight: String,
    pub gender: String,
    pub capture_rate: String,
    pub hatch_steps: String,
    pub steps: String,
    pub evolution: String,
    pub matchups: String,
    pub level_up_moves: String,
    pub machine_moves: String,
    pub move_columns: [String; 6],
    pub encounters: String,
    pub encounter_columns: [String; 4],
}

#[derive(Debug, Clone)]
pub struct Placeholders {
    pub no_evolution: String,
    pub no_encounters: String,
    pub no_moves: String,
    pub genderless: String,
    pub unknown: String,
}

impl Labels {
    /// Korean labels.
    pub fn korean() -> Self {
        let type_names = [
            (TypeTag::Normal, "노말"),
            (TypeTag::Fire, "불꽃"),
            (TypeTag::Water, "물"),
            (TypeTag::Electric, "전기"),
            (TypeTag::Grass, "풀"),
            (TypeTag::Ice, "얼음"),
            (TypeTag::Fighting, "격투"),
            (TypeTag::Poison, "독"),
            (TypeTag::Ground, "땅"),
            (TypeTag::Flying, "비행"),
            (TypeTag::Psychic, "에스퍼"),
            (TypeTag::Bug, "벌레"),
            (TypeTag::Rock, "바위"),
            (TypeTag::Ghost, "고스트"),
            (TypeTag::Dragon, "드래곤"),
            (TypeTag::Steel, "강철"),
            (TypeTag::Fairy, "페어리"),
            (TypeTag::Dark, "악"),
        ]
        .into_iter()
        .map(|(tag, name)| (tag, name.to_string()))
        .collect();

        let stat_names = [
            ("hp", "체력"),
            ("attack", "공격"),
            ("defense", "방어"),
            ("special-attack", "특공"),
            ("special-defense", "특방"),
            ("speed", "스피드"),
        ]
        .into_iter()
        .map(|(slug, name)| (slug.to_string(), name.to_string()))
        .collect();

        Self {
            type_names,
            physical: "물리".to_string(),
            special: "특수".to_string(),
            status: "변화".to_string(),
            evolution: EvolutionLabels {
                level_prefix: "Lv.".to_string(),
                use_item: "사용".to_string(),
                friendship: "친밀도".to_string(),
                hold_item: "지님".to_string(),
                knows_move: "습득".to_string(),
                near_location: "부근".to_string(),
                day: "낮".to_string(),
                night: "밤".to_string(),
                trade: "통신교환".to_string(),
                separator: " + ".to_string(),
                special: "특수 조건".to_string(),
                generic: "진화".to_string(),
            },
            no_description: "설명이 없습니다.".to_string(),
            unknown_method: "알 수 없음".to_string(),
            stat_names,
            headings: Headings {
                stats: "기본 능력치".to_string(),
                total: "합계".to_string(),
                abilities: "특성".to_string(),
                hidden_ability: "숨겨진 특성".to_string(),
                height: "키".to_string(),
                weight: "몸무게".to_string(),
                gender: "남녀 성비".to_string(),
                capture_rate: "포획률".to_string(),
                hatch_steps: "부화 걸음수".to_string(),
                steps: "걸음".to_string(),
                evolution: "진화 트리".to_string(),
                matchups: "방어 상성".to_string(),
                level_up_moves: "레벨 업".to_string(),
                machine_moves: "기술머신".to_string(),
                move_columns: ["Lv.", "기술명", "타입", "분류", "위력", "명중"].map(String::from),
                encounters: "출현 장소".to_string(),
                encounter_columns: ["버전", "지역명", "획득 방법", "출현 확률"].map(String::from),
            },
            placeholders: Placeholders {
                no_evolution: "진화 정보가 없습니다.".to_string(),
                no_encounters: "발견된 조우 정보가 없습니다.".to_string(),
                no_moves: "배울 수 있는 기술이 없습니다.".to_string(),
                genderless: "성별 미확인".to_string(),
                unknown: "-".to_string(),
            },
        }
    }

    /// Localized label for a damage category.
    pub fn category(&self, category: DamageCategory) -> &str {
        match category {
            DamageCategory::Physical => &self.physical,
            DamageCategory::Special => &self.special,
            DamageCategory::Status => &self.status,
        }
    }

    /// Localized type name, or the slug itself for unknown types.
    pub fn type_name<'a>(&'a self, slug: &'a str) -> &'a str {
        slug.parse::<TypeTag>()
            .ok()
            .and_then(|tag| self.type_names.get(&tag))
            .map(String::as_str)
            .unwrap_or(slug)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::korean()
    }
}
