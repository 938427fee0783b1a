//! Catalog loading.
//!
//! The catalog is read once at startup, either from the content bundled into
//! this crate or from a directory with the same layout. Files missing from the
//! directory fall back to the bundled copy, and per-component files under
//! `snippets/` and `docs/` override entries of the combined tables.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use walkdir::WalkDir;

use crate::i18n::{Localizer, Translations};
use crate::model::{ComponentId, Language, NavCategory, NavEntry};
use crate::record::DocumentationRecord;
use crate::snippet::CodeSnippetEntry;

/// Content files compiled into the binary.
pub mod bundled {
    pub const NAV: &str = include_str!("../content/nav.yaml");
    pub const I18N_EN: &str = include_str!("../content/i18n/en.yaml");
    pub const I18N_KO: &str = include_str!("../content/i18n/ko.yaml");
    pub const SNIPPETS: &str = include_str!("../content/snippets.yaml");
    pub const DOCS: &str = include_str!("../content/docs.yaml");

    /// Every bundled file with its path relative to a content directory.
    pub const FILES: &[(&str, &str)] = &[
        ("nav.yaml", NAV),
        ("i18n/en.yaml", I18N_EN),
        ("i18n/ko.yaml", I18N_KO),
        ("snippets.yaml", SNIPPETS),
        ("docs.yaml", DOCS),
    ];
}

/// Errors that can occur while loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid YAML in {file}: {message}")]
    InvalidYaml { file: String, message: String },

    #[error("Component {0} appears more than once in the navigation")]
    DuplicateComponent(ComponentId),

    #[error("Invalid component file name: {0}")]
    InvalidFileName(String),
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    key: String,
    items: Vec<ComponentId>,
}

/// The loaded content tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    navigation: Vec<NavCategory>,
    translations: Translations,
    snippets: HashMap<ComponentId, CodeSnippetEntry>,
    docs: HashMap<ComponentId, DocumentationRecord>,
}

impl Catalog {
    /// Load the content compiled into this crate.
    pub fn bundled() -> Result<Self, ContentError> {
        let sources = Sources {
            nav: bundled::NAV.to_string(),
            i18n_en: bundled::I18N_EN.to_string(),
            i18n_ko: bundled::I18N_KO.to_string(),
            snippets: bundled::SNIPPETS.to_string(),
            docs: bundled::DOCS.to_string(),
        };
        Self::from_sources(sources)
    }

    /// Load content from `dir`, using bundled files for anything missing.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            return Err(ContentError::Read {
                path: dir.display().to_string(),
                message: "not a directory".to_string(),
            });
        }

        let sources = Sources {
            nav: read_or(dir, "nav.yaml", bundled::NAV)?,
            i18n_en: read_or(dir, "i18n/en.yaml", bundled::I18N_EN)?,
            i18n_ko: read_or(dir, "i18n/ko.yaml", bundled::I18N_KO)?,
            snippets: read_or(dir, "snippets.yaml", bundled::SNIPPETS)?,
            docs: read_or(dir, "docs.yaml", bundled::DOCS)?,
        };
        let mut catalog = Self::from_sources(sources)?;

        for (id, entry) in read_component_files::<CodeSnippetEntry>(&dir.join("snippets"))? {
            catalog.snippets.insert(id, entry);
        }
        for (id, record) in read_component_files::<DocumentationRecord>(&dir.join("docs"))? {
            catalog.docs.insert(id, record);
        }
        catalog.warn_orphans();

        tracing::info!(
            "Loaded content from {} ({} components)",
            dir.display(),
            catalog.len()
        );

        Ok(catalog)
    }

    fn from_sources(sources: Sources) -> Result<Self, ContentError> {
        let raw: Vec<RawCategory> = parse_yaml("nav.yaml", &sources.nav)?;

        let mut seen = HashSet::new();
        let mut navigation = Vec::with_capacity(raw.len());
        for category in raw {
            let mut items = Vec::with_capacity(category.items.len());
            for id in category.items {
                if !seen.insert(id.clone()) {
                    return Err(ContentError::DuplicateComponent(id));
                }
                items.push(NavEntry::new(id));
            }
            navigation.push(NavCategory {
                key: category.key,
                items,
            });
        }

        let mut translations = Translations::new();
        for (language, file, yaml) in [
            (Language::En, "i18n/en.yaml", &sources.i18n_en),
            (Language::Ko, "i18n/ko.yaml", &sources.i18n_ko),
        ] {
            translations
                .insert_yaml(language, yaml)
                .map_err(|e| ContentError::InvalidYaml {
                    file: file.to_string(),
                    message: e.to_string(),
                })?;
        }

        let catalog = Self {
            navigation,
            translations,
            snippets: parse_yaml("snippets.yaml", &sources.snippets)?,
            docs: parse_yaml("docs.yaml", &sources.docs)?,
        };
        catalog.warn_orphans();

        Ok(catalog)
    }

    /// Log snippet or doc entries that no navigation entry points at.
    fn warn_orphans(&self) {
        for id in self.snippets.keys().chain(self.docs.keys()) {
            if self.entry(id.as_str()).is_none() {
                tracing::warn!("Content for '{}' has no navigation entry", id);
            }
        }
    }

    /// Navigation categories in display order.
    pub fn navigation(&self) -> &[NavCategory] {
        &self.navigation
    }

    /// All navigation entries flattened in category order.
    pub fn entries(&self) -> impl Iterator<Item = (&NavCategory, &NavEntry)> {
        self.navigation
            .iter()
            .flat_map(|category| category.items.iter().map(move |item| (category, item)))
    }

    /// Number of components in the navigation.
    pub fn len(&self) -> usize {
        self.navigation.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Navigation entry for a component id.
    pub fn entry(&self, id: &str) -> Option<&NavEntry> {
        self.entries().map(|(_, item)| item).find(|item| item.id.as_str() == id)
    }

    /// Category containing a component id.
    pub fn category_of(&self, id: &str) -> Option<&NavCategory> {
        self.entries()
            .find(|(_, item)| item.id.as_str() == id)
            .map(|(category, _)| category)
    }

    /// Code snippets for a component, if any.
    pub fn snippets(&self, id: &str) -> Option<&CodeSnippetEntry> {
        self.snippets.get(id).filter(|entry| !entry.is_empty())
    }

    /// Documentation record for a component, if any.
    pub fn documentation(&self, id: &str) -> Option<&DocumentationRecord> {
        self.docs.get(id)
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn localizer(&self, language: Language) -> Localizer<'_> {
        self.translations.localizer(language)
    }

    /// Localized display name of a component.
    pub fn component_name(&self, language: Language, id: &str) -> String {
        self.localizer(language).t(&format!("components.{id}"))
    }

    /// Localized label of a navigation category.
    pub fn category_name(&self, language: Language, key: &str) -> String {
        self.localizer(language).t(&format!("categories.{key}"))
    }
}

struct Sources {
    nav: String,
    i18n_en: String,
    i18n_ko: String,
    snippets: String,
    docs: String,
}

fn parse_yaml<T: DeserializeOwned>(file: &str, yaml: &str) -> Result<T, ContentError> {
    serde_yaml::from_str(yaml).map_err(|e| ContentError::InvalidYaml {
        file: file.to_string(),
        message: e.to_string(),
    })
}

fn read_or(dir: &Path, relative: &str, fallback: &str) -> Result<String, ContentError> {
    let path = dir.join(relative);
    if !path.exists() {
        tracing::debug!("{} not found, using bundled copy", path.display());
        return Ok(fallback.to_string());
    }

    fs::read_to_string(&path).map_err(|e| ContentError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read every `<id>.yaml` file under `dir`.
fn read_component_files<T: DeserializeOwned>(
    dir: &Path,
) -> Result<Vec<(ComponentId, T)>, ContentError> {
    let mut out = Vec::new();
    if !dir.is_dir() {
        return Ok(out);
    }

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !path.is_file() || (ext != "yaml" && ext != "yml") {
            continue;
        }

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let id = ComponentId::new(stem)
            .map_err(|_| ContentError::InvalidFileName(path.display().to_string()))?;

        let source = fs::read_to_string(path).map_err(|e| ContentError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let value = parse_yaml(&path.display().to_string(), &source)?;
        out.push((id, value));
    }

    Ok(out)
}
