//! Project configuration (`swatch.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use swatch_content::Language;

/// Configuration file structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub content: ContentConfig,
    pub build: BuildSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Overrides the localized site title
    pub title: Option<String>,
    pub base_url: String,
    pub output: PathBuf,
    pub default_language: Language,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            base_url: "/".to_string(),
            output: PathBuf::from("dist"),
            default_language: Language::default(),
            styles: vec![],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory; bundled content when absent
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7777,
        }
    }
}

impl Config {
    /// Load configuration from `path` if it exists.
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());

        Ok(config)
    }
}

/// Written by `swatch init`.
pub const DEFAULT_CONFIG: &str = r#"# Swatch configuration

[site]
# Overrides the localized site title
# title = "Material Design"

# Base URL (for deployment)
base_url = "/"

# Output directory for built site
output = "dist"

# Language of the root pages: "ko" or "en"
default_language = "ko"

# Extra stylesheets added to every page
styles = []

[content]
# Editable content; remove to use the bundled catalog
dir = "content"

[build]
minify = true

[server]
host = "127.0.0.1"
port = 7777
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = Config::load(&temp.path().join("swatch.toml")).unwrap();

        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.output, PathBuf::from("dist"));
        assert_eq!(config.site.default_language, Language::Ko);
        assert_eq!(config.content.dir, None);
        assert!(config.build.minify);
        assert_eq!(config.server.port, 7777);
    }

    #[test]
    fn default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.content.dir, Some(PathBuf::from("content")));
        assert_eq!(config.site.title, None);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("swatch.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Docs\"\ndefault_language = \"en\"\n\n[build]\nminify = false\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.site.title.as_deref(), Some("Docs"));
        assert_eq!(config.site.default_language, Language::En);
        assert_eq!(config.site.base_url, "/");
        assert!(!config.build.minify);
        assert_eq!(config.server.port, 7777);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("swatch.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn unknown_language_is_an_error() {
        assert!(toml::from_str::<Config>("[site]\ndefault_language = \"fr\"\n").is_err());
    }
}
