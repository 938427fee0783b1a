//! Initialize a swatch project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use swatch_content::bundled;

use crate::config::DEFAULT_CONFIG;

/// Run the init command.
///
/// Writes `config_path` and exports the bundled content into `content/`
/// next to it. Existing files are kept unless `yes` is set.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing swatch...");

    let root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let content_dir = root.join("content");

    if content_dir.exists() && !yes {
        tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
        return Ok(());
    }

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    for (name, contents) in bundled::FILES {
        let path = content_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created content/{}", name);
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'swatch dev' to start the development server.");

    Ok(())
}
