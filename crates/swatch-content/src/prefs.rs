//! Language and theme preferences.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::model::Language;

/// Color theme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unsupported theme: {other}")),
        }
    }
}

/// Display preferences for one reader.
///
/// Passed explicitly into rendering; there is no ambient global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Build preferences from what is known about the reader.
    ///
    /// The language comes from the persisted preference when it names a
    /// supported language, otherwise from the environment hint, otherwise
    /// `default_language`. Unparseable persisted values are ignored.
    pub fn resolve(
        persisted_language: Option<&str>,
        persisted_theme: Option<&str>,
        environment: Option<&str>,
        default_language: Language,
    ) -> Self {
        let language = persisted_language
            .and_then(Language::from_code)
            .or_else(|| environment.map(Language::from_environment))
            .unwrap_or(default_language);

        let theme = persisted_theme
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();

        Self { language, theme }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
