//! Core identifiers and navigation types.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static COMPONENT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").expect("Invalid component id regex")
});

/// Stable kebab-case key for a catalog component (e.g. `text-field`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct ComponentId(String);

/// Returned when a string is not a valid component id.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid component id: {0:?}")]
pub struct InvalidComponentId(pub String);

impl ComponentId {
    /// Parse and validate a component id.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidComponentId> {
        let id = id.into();
        if COMPONENT_ID_RE.is_match(&id) {
            Ok(Self(id))
        } else {
            Err(InvalidComponentId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = InvalidComponentId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ComponentId {
    type Err = InvalidComponentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Display language of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: [Language; 2] = [Language::Ko, Language::En];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Parse a language code, accepting region suffixes (`en-US`, `ko_KR`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_', ',', ';'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "ko" => Some(Self::Ko),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Infer a language from an environment hint such as `Accept-Language`
    /// or `LANG`. Anything that does not start with Korean is English.
    pub fn from_environment(hint: &str) -> Self {
        if hint.trim().to_ascii_lowercase().starts_with("ko") {
            Self::Ko
        } else {
            Self::En
        }
    }

    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ko => Self::En,
            Self::En => Self::Ko,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported language: {s}"))
    }
}

/// Text with a value per language.
///
/// Content files may write either a plain string, used for every language,
/// or a map such as `{ en: "Filled", ko: "채움" }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    PerLanguage(BTreeMap<Language, String>),
}

impl LocalizedText {
    /// Text for `language`, falling back to the default language and then to
    /// whichever translation exists. Blank translations count as missing.
    pub fn get(&self, language: Language) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::PerLanguage(map) => {
                let filled = |lang: &Language| map.get(lang).filter(|t| !t.trim().is_empty());
                filled(&language)
                    .or_else(|| filled(&Language::default()))
                    .or_else(|| map.values().find(|t| !t.trim().is_empty()))
                    .map(String::as_str)
                    .unwrap_or("")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.trim().is_empty(),
            Self::PerLanguage(map) => map.values().all(|t| t.trim().is_empty()),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

/// A component entry in the sidebar navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub id: ComponentId,
    /// Route path, always `/components/{id}`
    pub path: String,
}

impl NavEntry {
    pub fn new(id: ComponentId) -> Self {
        let path = format!("/components/{id}");
        Self { id, path }
    }
}

/// A group of navigation entries (e.g. "Actions").
#[derive(Debug, Clone, PartialEq)]
pub struct NavCategory {
    /// Translation key under `categories.`
    pub key: String,
    pub items: Vec<NavEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_component_ids() {
        assert!(ComponentId::new("button").is_ok());
        assert!(ComponentId::new("text-field").is_ok());
        assert!(ComponentId::new("sheets-bottom").is_ok());

        assert!(ComponentId::new("").is_err());
        assert!(ComponentId::new("Text-Field").is_err());
        assert!(ComponentId::new("text--field").is_err());
        assert!(ComponentId::new("-button").is_err());
        assert!(ComponentId::new("../etc").is_err());
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
        assert_eq!(Language::from_code("ko_KR"), Some(Language::Ko));
        assert_eq!(Language::from_code("KO"), Some(Language::Ko));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!("ja".parse::<Language>().ok(), None);
    }

    #[test]
    fn environment_hint_defaults_to_english() {
        assert_eq!(Language::from_environment("ko-KR,ko;q=0.9"), Language::Ko);
        assert_eq!(Language::from_environment("fr-FR"), Language::En);
        assert_eq!(Language::from_environment(""), Language::En);
    }

    #[test]
    fn localized_text_falls_back() {
        let text: LocalizedText = serde_yaml::from_str("{ en: Filled }").unwrap();
        assert_eq!(text.get(Language::En), "Filled");
        assert_eq!(text.get(Language::Ko), "Filled");

        let both: LocalizedText = serde_yaml::from_str("{ en: Filled, ko: 채움 }").unwrap();
        assert_eq!(both.get(Language::Ko), "채움");

        let plain: LocalizedText = serde_yaml::from_str("Snackbar").unwrap();
        assert_eq!(plain.get(Language::En), "Snackbar");
    }

    #[test]
    fn blank_translation_falls_back() {
        let text: LocalizedText = serde_yaml::from_str("{ en: '', ko: 참고 }").unwrap();
        assert!(!text.is_empty());
        assert_eq!(text.get(Language::En), "참고");

        let ko_blank: LocalizedText = serde_yaml::from_str("{ en: Note, ko: '  ' }").unwrap();
        assert_eq!(ko_blank.get(Language::Ko), "Note");

        let all_blank: LocalizedText = serde_yaml::from_str("{ en: '', ko: ' ' }").unwrap();
        assert!(all_blank.is_empty());
        assert_eq!(all_blank.get(Language::En), "");
    }

    #[test]
    fn nav_entry_path_uses_id() {
        let entry = NavEntry::new(ComponentId::new("icon-button").unwrap());
        assert_eq!(entry.path, "/components/icon-button");
    }
}
