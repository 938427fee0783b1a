//! Localization resolver.
//!
//! Translation tables are nested string maps, one per language, addressed by
//! dotted paths such as `components.button` or `page.noExample`. Lookups never
//! fail: a path missing from the requested language is retried in the default
//! language, and a path missing everywhere resolves to its last segment so the
//! page never shows blank text.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::model::Language;

/// A node in a translation table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    Table(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    fn lookup(&self, path: &str) -> Option<&str> {
        let mut node = self;
        for segment in path.split('.') {
            match node {
                Self::Table(table) => node = table.get(segment)?,
                Self::Text(_) => return None,
            }
        }
        match node {
            Self::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }

    /// Visit every text leaf with its dotted path.
    fn walk<'a>(&'a self, prefix: &mut Vec<&'a str>, out: &mut Vec<String>) {
        match self {
            Self::Text(_) => out.push(prefix.join(".")),
            Self::Table(table) => {
                for (key, child) in table {
                    prefix.push(key);
                    child.walk(prefix, out);
                    prefix.pop();
                }
            }
        }
    }
}

/// Translation tables for every language.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<Language, TranslationNode>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML table and register it for `language`.
    pub fn insert_yaml(&mut self, language: Language, yaml: &str) -> Result<(), serde_yaml::Error> {
        let table: TranslationNode = serde_yaml::from_str(yaml)?;
        self.tables.insert(language, table);
        Ok(())
    }

    /// Exact lookup in one language, without fallbacks.
    pub fn lookup(&self, language: Language, path: &str) -> Option<&str> {
        self.tables.get(&language)?.lookup(path)
    }

    /// Resolve `path` for `language` with the documented fallbacks.
    pub fn resolve<'a>(&'a self, language: Language, path: &'a str) -> &'a str {
        if let Some(text) = self.lookup(language, path) {
            return text;
        }

        if language != Language::default() {
            if let Some(text) = self.lookup(Language::default(), path) {
                return text;
            }
        }

        tracing::debug!("Missing translation for {} ({})", path, language);
        last_segment(path)
    }

    /// All text paths defined for `language`.
    pub fn paths(&self, language: Language) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(table) = self.tables.get(&language) {
            table.walk(&mut Vec::new(), &mut out);
        }
        out
    }

    /// A resolver bound to one language.
    pub fn localizer(&self, language: Language) -> Localizer<'_> {
        Localizer {
            translations: self,
            language,
        }
    }
}

/// Last non-empty segment of a dotted path.
fn last_segment(path: &str) -> &str {
    path.rsplit('.')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}

/// Replace `{name}` placeholders with the supplied values.
///
/// Placeholders without a value are left untouched.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Localization resolver bound to a single language.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    translations: &'a Translations,
    language: Language,
}

impl<'a> Localizer<'a> {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a dotted path.
    pub fn t(&self, path: &str) -> String {
        self.translations.resolve(self.language, path).to_string()
    }

    /// Resolve a dotted path and fill in `{placeholders}`.
    pub fn t_with(&self, path: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.translations.resolve(self.language, path), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations() -> Translations {
        let mut translations = Translations::new();
        translations
            .insert_yaml(
                Language::En,
                r#"
components:
  button: Buttons
page:
  placeholder: "This is a placeholder page for the {name} component."
"#,
            )
            .unwrap();
        translations
            .insert_yaml(
                Language::Ko,
                r#"
components:
  button: 버튼
  chips: 칩
"#,
            )
            .unwrap();
        translations
    }

    #[test]
    fn resolves_per_language() {
        let t = translations();

        assert_eq!(t.resolve(Language::En, "components.button"), "Buttons");
        assert_eq!(t.resolve(Language::Ko, "components.button"), "버튼");
    }

    #[test]
    fn falls_back_to_default_language() {
        let t = translations();

        assert_eq!(t.resolve(Language::En, "components.chips"), "칩");
    }

    #[test]
    fn missing_path_resolves_to_last_segment() {
        let t = translations();

        assert_eq!(t.resolve(Language::En, "components.text-field"), "text-field");
        assert_eq!(t.resolve(Language::Ko, "nowhere"), "nowhere");
        assert_eq!(t.resolve(Language::En, "button.filled."), "filled");
    }

    #[test]
    fn table_node_is_not_text() {
        let t = translations();

        assert_eq!(t.lookup(Language::En, "components"), None);
        assert_eq!(t.resolve(Language::En, "components"), "components");
        assert_eq!(t.lookup(Language::En, "components.button.extra"), None);
    }

    #[test]
    fn blank_text_falls_back() {
        let mut t = translations();
        t.insert_yaml(
            Language::En,
            "page:\n  noExample: ''\n  copy: '  '\n",
        )
        .unwrap();
        t.insert_yaml(Language::Ko, "page:\n  noExample: 예제가 없습니다.\n")
            .unwrap();

        assert_eq!(t.lookup(Language::En, "page.noExample"), None);
        assert_eq!(t.resolve(Language::En, "page.noExample"), "예제가 없습니다.");
        assert_eq!(t.resolve(Language::En, "page.copy"), "copy");
    }

    #[test]
    fn localizer_interpolates() {
        let t = translations();
        let en = t.localizer(Language::En);

        assert_eq!(
            en.t_with("page.placeholder", &[("name", "Buttons")]),
            "This is a placeholder page for the Buttons component."
        );
        assert_eq!(interpolate("{a} {b}", &[("a", "x")]), "x {b}");
    }

    #[test]
    fn lists_paths() {
        let t = translations();
        let mut paths = t.paths(Language::Ko);
        paths.sort();

        assert_eq!(paths, vec!["components.button", "components.chips"]);
    }
}
