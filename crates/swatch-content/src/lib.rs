//! Content tables for the swatch component catalog.
//!
//! This crate owns the static data behind the site (navigation, code snippets,
//! documentation records and translation strings), the localization resolver
//! that reads it, and the language/theme preferences used to pick a locale.

pub mod catalog;
pub mod i18n;
pub mod model;
pub mod prefs;
pub mod record;
pub mod snippet;

pub use catalog::{bundled, Catalog, ContentError};
pub use i18n::{Localizer, Translations};
pub use model::{ComponentId, InvalidComponentId, Language, LocalizedText, NavCategory, NavEntry};
pub use prefs::{Preferences, Theme};
pub use record::{DocField, DocumentationRecord, NamedItem, SpecRow};
pub use snippet::{CodeSnippetEntry, Framework, SnippetVariant};
