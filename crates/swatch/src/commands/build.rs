//! Static site build command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use swatch_site::{BuildConfig, StaticBuilder};

use crate::config::Config;

/// Merge command-line overrides into the build configuration.
fn build_config(config: Config, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
    BuildConfig {
        content_dir: config.content.dir,
        output_dir: output.unwrap_or(config.site.output),
        minify: minify.unwrap_or(config.build.minify),
        base_url: config.site.base_url,
        title: config.site.title,
        styles: config.site.styles,
        default_language: config.site.default_language,
    }
}

/// Run the build command.
pub async fn run(config: Config, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let config = build_config(config, output, minify);
    let result = StaticBuilder::new(config)
        .build()
        .await
        .context("Build failed")?;

    tracing::info!(
        "Built {} pages with {} examples in {}ms",
        result.pages,
        result.examples,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
