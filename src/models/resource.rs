//! Shared PokéAPI building blocks: resource links and localized text.

use serde::{Deserialize, Serialize};

/// A `{ name, url }` link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id taken from the last non-empty path segment of the URL.
    ///
    /// `https://pokeapi.co/api/v2/pokemon-species/133/` yields `Some(133)`.
    pub fn id(&self) -> Option<u32> {
        self.url
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
            .and_then(|segment| segment.parse().ok())
    }

    /// The slug with separators turned into spaces (`viridian-forest-area`
    /// becomes `viridian forest area`).
    pub fn spaced_name(&self) -> String {
        self.name.replace('-', " ")
    }
}

/// A name in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

/// A flavor text entry in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Picks the first entry whose language matches `language`.
pub fn localized_name<'a>(names: &'a [LocalizedName], language: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|n| n.language.name == language)
        .map(|n| n.name.as_str())
}

/// Picks the first flavor text whose language matches `language`.
pub fn localized_flavor<'a>(entries: &'a [FlavorText], language: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|f| f.language.name == language)
        .map(|f| f.flavor_text.as_str())
}

/// Folds page-break control characters into a single-line description:
/// form feeds become newlines, then every newline becomes a space.
pub fn fold_flavor_text(text: &str) -> String {
    text.replace('\u{000c}', "\n").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str, url: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_id_from_trailing_slash_url() {
        let r = link("eevee", "https://pokeapi.co/api/v2/pokemon-species/133/");
        assert_eq!(r.id(), Some(133));
    }

    #[test]
    fn test_id_without_trailing_slash() {
        let r = link("eevee", "https://pokeapi.co/api/v2/pokemon-species/133");
        assert_eq!(r.id(), Some(133));
    }

    #[test]
    fn test_id_missing() {
        assert_eq!(link("eevee", "").id(), None);
        assert_eq!(link("eevee", "https://pokeapi.co/api/v2/type/fire/").id(), None);
    }

    #[test]
    fn test_spaced_name() {
        assert_eq!(
            link("viridian-forest-area", "").spaced_name(),
            "viridian forest area"
        );
    }

    #[test]
    fn test_localized_name_picks_language() {
        let names = vec![
            LocalizedName {
                name: "Bulbasaur".to_string(),
                language: link("en", ""),
            },
            LocalizedName {
                name: "이상해씨".to_string(),
                language: link("ko", ""),
            },
        ];
        assert_eq!(localized_name(&names, "ko"), Some("이상해씨"));
        assert_eq!(localized_name(&names, "fr"), None);
    }

    #[test]
    fn test_fold_flavor_text() {
        let raw = "A strange seed was\nplanted on its\u{000c}back at birth.";
        assert_eq!(
            fold_flavor_text(raw),
            "A strange seed was planted on its back at birth."
        );
    }
}
