//! Localized name → national dex id lookup.
//!
//! The index is a flat JSON object (`{"이상해씨": 1, ...}`) built from
//! PokéAPI's `pokemon_species_names.csv` by `dexcard names build` and loaded
//! once at startup. Keys are stored normalized, so a lookup is an exact match
//! on the normalized search term.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::AppError;

/// Trims, applies Unicode canonical composition (NFC) and lowercases.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_lowercase()
}

/// Immutable name → id map.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: HashMap<String, u32>,
}

/// One row of `pokemon_species_names.csv`.
#[derive(Debug, Deserialize)]
struct SpeciesNameRow {
    pokemon_species_id: u32,
    local_language_id: u32,
    name: String,
}

impl NameIndex {
    /// An index with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an index from `(name, id)` pairs. When a normalized name
    /// repeats, the last occurrence wins.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (name, id) in pairs {
            let key = normalize_term(name.as_ref());
            if key.is_empty() {
                continue;
            }
            entries.insert(key, id);
        }
        Self { entries }
    }

    /// Parses the JSON object form.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let raw: HashMap<String, u32> = serde_json::from_str(json)?;
        Ok(Self::from_pairs(raw))
    }

    /// Loads the index from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let json = tokio::fs::read_to_string(path).await?;
        let index = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), entries = index.len(), "Loaded name index");
        Ok(index)
    }

    /// Loads the index, falling back to an empty one when the file is missing
    /// or unreadable. English names and ids keep working without it.
    pub async fn load_or_empty(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Name index unavailable; localized name search disabled (run `dexcard names build`)"
                );
                Self::empty()
            }
        }
    }

    /// Builds the index from the species-names CSV, keeping one language.
    ///
    /// An unreadable header row fails the build; data rows that fail to parse
    /// are skipped.
    pub fn from_csv<R: Read>(reader: R, language_id: u32) -> Result<Self, AppError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns = csv_reader.headers()?.len();
        tracing::debug!(columns, language_id, "Reading species names");

        let mut pairs = Vec::new();
        let mut skipped = 0usize;
        for row in csv_reader.deserialize::<SpeciesNameRow>() {
            match row {
                Ok(row) if row.local_language_id == language_id => {
                    pairs.push((row.name, row.pokemon_species_id));
                }
                Ok(_) => {}
                Err(e) => {
                    skipped += 1;
                    tracing::debug!(error = %e, "Skipping malformed species name row");
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Skipped malformed rows while building name index");
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Id for a search term, if the normalized term is a known name.
    pub fn lookup(&self, term: &str) -> Option<u32> {
        self.entries.get(&normalize_term(term)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON, sorted by key for stable output.
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        let sorted: BTreeMap<&str, u32> = self
            .entries
            .iter()
            .map(|(name, id)| (name.as_str(), *id))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
pokemon_species_id,local_language_id,name,genus
1,1,フシギダネ,たねポケモン
1,3,이상해씨,씨앗포켓몬
1,9,Bulbasaur,Seed Pokémon
2,3,이상해풀,씨앗포켓몬
25,3,피카츄,쥐포켓몬
not-a-number,3,broken,
";

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  Pikachu \n"), "pikachu");
        // Decomposed jamo compose to the same syllables.
        let decomposed = "\u{110B}\u{1175}\u{1109}\u{1161}\u{11BC}\u{1112}\u{1162}\u{110A}\u{1175}";
        assert_eq!(normalize_term(decomposed), "이상해씨");
    }

    #[test]
    fn test_from_csv_filters_language() {
        let index = NameIndex::from_csv(CSV.as_bytes(), 3).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup("이상해씨"), Some(1));
        assert_eq!(index.lookup("피카츄"), Some(25));
        assert_eq!(index.lookup("Bulbasaur"), None);
    }

    #[test]
    fn test_from_csv_other_language() {
        let index = NameIndex::from_csv(CSV.as_bytes(), 9).unwrap();
        assert_eq!(index.lookup("bulbasaur"), Some(1));
        assert_eq!(index.lookup(" BULBASAUR "), Some(1));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let index = NameIndex::from_pairs([("피카츄", 999), ("피카츄", 25)]);
        assert_eq!(index.lookup("피카츄"), Some(25));

        let csv = "pokemon_species_id,local_language_id,name,genus\n1,3,같은이름,\n2,3,같은이름,\n";
        let index = NameIndex::from_csv(csv.as_bytes(), 3).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("같은이름"), Some(2));
    }

    #[test]
    fn test_from_csv_rejects_unreadable_header() {
        let bytes: &[u8] = b"pokemon_species_id,\xff\xfe,name\n1,3,x\n";
        let err = NameIndex::from_csv(bytes, 3).unwrap_err();
        assert!(matches!(err, AppError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn test_json_round_trip_is_sorted() {
        let index = NameIndex::from_pairs([("이상해풀", 2), ("이상해씨", 1)]);
        let json = index.to_json_pretty().unwrap();
        assert!(json.find("이상해씨").unwrap() < json.find("이상해풀").unwrap());

        let reloaded = NameIndex::from_json_str(&json).unwrap();
        assert_eq!(reloaded.lookup("이상해풀"), Some(2));
    }

    #[tokio::test]
    async fn test_load_or_empty_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let index = NameIndex::load_or_empty(&dir.path().join("missing.json")).await;
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, r#"{"이상해씨": 1, "피카츄": 25}"#).unwrap();

        let index = NameIndex::load(&path).await.unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("피카츄"), Some(25));
    }
}
