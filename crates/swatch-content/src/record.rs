//! Sparse per-component documentation records.

use serde::Deserialize;

use crate::model::LocalizedText;

/// A titled entry: a component type, a state, an anatomy part, etc.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedItem {
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
}

impl NamedItem {
    /// Whether the item has no name to show.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// One row of the specs table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpecRow {
    pub property: LocalizedText,
    pub value: LocalizedText,
}

impl SpecRow {
    pub fn is_empty(&self) -> bool {
        self.property.is_empty() && self.value.is_empty()
    }
}

/// Documentation for one component beyond its examples.
///
/// Every field is optional. A field that is absent, or present but empty,
/// produces no section on the page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentationRecord {
    #[serde(default)]
    pub overview: Option<LocalizedText>,
    #[serde(default)]
    pub types: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub states: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub anatomy: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub specs: Option<Vec<SpecRow>>,
    #[serde(default)]
    pub guidelines: Option<Vec<LocalizedText>>,
    #[serde(default)]
    pub comparisons: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub configurations: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub best_practices: Option<Vec<LocalizedText>>,
    #[serde(default)]
    pub dos: Option<Vec<LocalizedText>>,
    #[serde(default)]
    pub donts: Option<Vec<LocalizedText>>,
    #[serde(default)]
    pub error_states: Option<Vec<NamedItem>>,
    #[serde(default)]
    pub accessibility: Option<Vec<LocalizedText>>,
    #[serde(default)]
    pub note: Option<LocalizedText>,
}

/// Optional documentation fields in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocField {
    Types,
    States,
    Anatomy,
    Specs,
    Guidelines,
    Comparisons,
    Configurations,
    BestPractices,
    Dos,
    Donts,
    ErrorStates,
    Accessibility,
    Note,
}

impl DocField {
    pub const ORDER: [DocField; 13] = [
        DocField::Types,
        DocField::States,
        DocField::Anatomy,
        DocField::Specs,
        DocField::Guidelines,
        DocField::Comparisons,
        DocField::Configurations,
        DocField::BestPractices,
        DocField::Dos,
        DocField::Donts,
        DocField::ErrorStates,
        DocField::Accessibility,
        DocField::Note,
    ];

    /// Anchor id and translation key suffix.
    pub fn key(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::States => "states",
            Self::Anatomy => "anatomy",
            Self::Specs => "specs",
            Self::Guidelines => "guidelines",
            Self::Comparisons => "comparisons",
            Self::Configurations => "configurations",
            Self::BestPractices => "bestPractices",
            Self::Dos => "dos",
            Self::Donts => "donts",
            Self::ErrorStates => "errorStates",
            Self::Accessibility => "accessibility",
            Self::Note => "note",
        }
    }
}

/// List entries that may be blank in content files.
trait Entry {
    fn is_blank(&self) -> bool;
}

impl Entry for NamedItem {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Entry for SpecRow {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Entry for LocalizedText {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// A list counts only if at least one entry has text.
fn has_items<T: Entry>(field: &Option<Vec<T>>) -> bool {
    field
        .as_ref()
        .is_some_and(|items| items.iter().any(|item| !item.is_blank()))
}

fn has_text(field: &Option<LocalizedText>) -> bool {
    field.as_ref().is_some_and(|text| !text.is_empty())
}

impl DocumentationRecord {
    /// Whether `field` carries renderable content.
    pub fn has(&self, field: DocField) -> bool {
        match field {
            DocField::Types => has_items(&self.types),
            DocField::States => has_items(&self.states),
            DocField::Anatomy => has_items(&self.anatomy),
            DocField::Specs => has_items(&self.specs),
            DocField::Guidelines => has_items(&self.guidelines),
            DocField::Comparisons => has_items(&self.comparisons),
            DocField::Configurations => has_items(&self.configurations),
            DocField::BestPractices => has_items(&self.best_practices),
            DocField::Dos => has_items(&self.dos),
            DocField::Donts => has_items(&self.donts),
            DocField::ErrorStates => has_items(&self.error_states),
            DocField::Accessibility => has_items(&self.accessibility),
            DocField::Note => has_text(&self.note),
        }
    }

    /// Present optional fields, in page order.
    pub fn present_fields(&self) -> Vec<DocField> {
        DocField::ORDER
            .into_iter()
            .filter(|field| self.has(*field))
            .collect()
    }

    /// The overview text, if it has content.
    pub fn overview(&self) -> Option<&LocalizedText> {
        self.overview.as_ref().filter(|text| !text.is_empty())
    }
}
