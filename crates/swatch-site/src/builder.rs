//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use swatch_content::{Catalog, ComponentId, ContentError, Language, Preferences};
use swatch_preview::PreviewRegistry;

use crate::assets::AssetPipeline;
use crate::renderer::{LinkStyle, RenderOptions, SiteRenderer};
use crate::templates::TemplateEngine;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content directory; bundled content when unset
    pub content_dir: Option<PathBuf>,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title; the localized title when unset
    pub title: Option<String>,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,

    /// Language of the root pages
    pub default_language: Language,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: None,
            styles: vec![],
            default_language: Language::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of HTML pages generated
    pub pages: usize,

    /// Number of live previews across all pages
    pub examples: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load content: {0}")]
    ContentError(#[from] ContentError),

    #[error("Failed to read {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A page to be built.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageKind {
    Home,
    Component(ComponentId),
    NotFound,
}

#[derive(Debug)]
struct PageJob {
    language: Language,
    kind: PageKind,
    /// Relative to the output directory
    output_path: PathBuf,
}

/// What a rendered page contributes to the build summary.
#[derive(Debug, Default)]
struct PageOutput {
    examples: usize,
    search: Option<serde_json::Value>,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    previews: PreviewRegistry,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            previews: PreviewRegistry::builtin(),
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let catalog = match &self.config.content_dir {
            Some(dir) => Catalog::from_dir(dir)?,
            None => Catalog::bundled()?,
        };

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let options = self.render_options();
        let renderer = SiteRenderer::new(&catalog, &self.previews, &self.templates, &options);

        let jobs = self.plan(&catalog);
        tracing::info!("Rendering {} pages", jobs.len());

        // Render pages in parallel
        let results: Vec<Result<PageOutput, BuildError>> = jobs
            .par_iter()
            .map(|job| self.build_page(&renderer, job))
            .collect();

        let mut total_pages = jobs.len();
        let mut total_examples = 0;
        let mut index = Vec::new();

        for result in results {
            let output = result?;
            total_examples += output.examples;
            index.extend(output.search);
        }

        // Root pages
        let default = Preferences::default().with_language(self.config.default_language);
        let redirect = renderer
            .render_redirect(self.config.default_language)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;
        self.write(Path::new("index.html"), &redirect)?;
        let not_found = renderer
            .render_not_found(default)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;
        self.write(Path::new("404.html"), &not_found)?;
        total_pages += 2;

        // Generate assets
        self.generate_assets()?;

        // Generate search index
        self.generate_search_index(&index)?;

        // Generate sitemap
        self.generate_sitemap(&jobs)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: total_pages,
            examples: total_examples,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn render_options(&self) -> RenderOptions {
        let base_url = &self.config.base_url;
        let styles = self
            .config
            .styles
            .iter()
            .map(|style| format!("{base_url}assets/{}", stylesheet_name(Path::new(style))))
            .collect();

        RenderOptions {
            links: LinkStyle::Static {
                base_url: base_url.clone(),
            },
            site_title: self.config.title.clone(),
            styles,
            live_path: None,
        }
    }

    /// Every language-specific page of the site.
    fn plan(&self, catalog: &Catalog) -> Vec<PageJob> {
        let mut jobs = Vec::new();

        for language in Language::ALL {
            let lang = PathBuf::from(language.code());
            jobs.push(PageJob {
                language,
                kind: PageKind::Home,
                output_path: lang.join("home").join("index.html"),
            });
            for (_, entry) in catalog.entries() {
                jobs.push(PageJob {
                    language,
                    kind: PageKind::Component(entry.id.clone()),
                    output_path: lang
                        .join("components")
                        .join(entry.id.as_str())
                        .join("index.html"),
                });
            }
            jobs.push(PageJob {
                language,
                kind: PageKind::NotFound,
                output_path: lang.join("404.html"),
            });
        }

        jobs
    }

    /// Render and write a single page.
    fn build_page(
        &self,
        renderer: &SiteRenderer<'_>,
        job: &PageJob,
    ) -> Result<PageOutput, BuildError> {
        let prefs = Preferences::default().with_language(job.language);
        let template_error = |e: crate::renderer::RenderError| {
            BuildError::TemplateError(format!("{}: {}", job.output_path.display(), e))
        };

        let (html, output) = match &job.kind {
            PageKind::Home => (
                renderer.render_home(prefs).map_err(template_error)?,
                PageOutput::default(),
            ),
            PageKind::NotFound => (
                renderer.render_not_found(prefs).map_err(template_error)?,
                PageOutput::default(),
            ),
            PageKind::Component(id) => {
                let page = renderer.component(id.as_str(), job.language);
                let html = renderer.render_page(&page, prefs).map_err(template_error)?;
                let category = renderer
                    .catalog()
                    .category_of(id.as_str())
                    .map(|c| renderer.catalog().category_name(job.language, &c.key))
                    .unwrap_or_default();

                let record = serde_json::json!({
                    "id": page.id,
                    "language": job.language.code(),
                    "title": page.title,
                    "category": category,
                    "url": self.url_for(&job.output_path),
                    "summary": page.summary,
                });

                (
                    html,
                    PageOutput {
                        examples: page.example_count(),
                        search: Some(record),
                    },
                )
            }
        };

        self.write(&job.output_path, &html)?;
        tracing::debug!("Wrote {}", job.output_path.display());

        Ok(output)
    }

    /// Site URL of an output file.
    fn url_for(&self, output_path: &Path) -> String {
        let path = output_path.to_string_lossy().replace('\\', "/");
        let path = path.strip_suffix("index.html").unwrap_or(&path);
        format!("{}{}", self.config.base_url, path)
    }

    fn write(&self, relative: &Path, contents: &str) -> Result<(), BuildError> {
        let path = self.config.output_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }
        fs::write(&path, contents).map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Generate main CSS
        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Keeping unminified CSS: {}", e);
                    css
                }
            }
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let content = fs::read_to_string(&source_path).map_err(|e| {
                    BuildError::ReadError(format!("stylesheet {}: {}", style_path, e))
                })?;
                fs::write(assets_dir.join(stylesheet_name(&source_path)), content)
                    .map_err(|e| BuildError::WriteError(e.to_string()))?;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Generate search index.
    fn generate_search_index(&self, index: &[serde_json::Value]) -> Result<(), BuildError> {
        let json = serde_json::to_string_pretty(index)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, jobs: &[PageJob]) -> Result<(), BuildError> {
        let urls: Vec<String> = jobs
            .iter()
            .filter(|job| job.kind != PageKind::NotFound)
            .map(|job| format!("  <url>\n    <loc>{}</loc>\n  </url>", self.url_for(&job.output_path)))
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Also generate robots.txt
        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

fn stylesheet_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|f| f.to_str())
        .unwrap_or("style.css")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn builds_both_languages() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        });
        let result = builder.build().await.unwrap();

        let catalog = Catalog::bundled().unwrap();
        assert_eq!(result.pages, 2 * (catalog.len() + 2) + 2);
        for lang in ["ko", "en"] {
            assert!(out.join(lang).join("home/index.html").exists());
            assert!(out.join(lang).join("components/button/index.html").exists());
            assert!(out.join(lang).join("components/text-field/index.html").exists());
            assert!(out.join(lang).join("404.html").exists());
        }
        assert!(out.join("index.html").exists());
        assert!(out.join("404.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
    }

    #[tokio::test]
    async fn counts_examples() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let result = StaticBuilder::new(BuildConfig {
            output_dir: out,
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let catalog = Catalog::bundled().unwrap();
        let per_language: usize = catalog
            .entries()
            .map(|(_, e)| catalog.snippets(e.id.as_str()).map_or(0, |s| s.len()))
            .sum();
        assert_eq!(result.examples, 2 * per_language);
    }

    #[tokio::test]
    async fn root_pages_use_default_language() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            default_language: Language::En,
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let redirect = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(redirect.contains(r#"lang = hint ? (hint.indexOf('ko') === 0 ? 'ko' : 'en') : "en""#));
        let not_found = fs::read_to_string(out.join("404.html")).unwrap();
        assert!(not_found.contains(r#"<html lang="en">"#));
        assert!(not_found.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn generates_search_index() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let index = fs::read_to_string(out.join("search-index.json")).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&index).unwrap();
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(records.len(), 2 * catalog.len());

        let button = records
            .iter()
            .find(|r| r["id"] == "button" && r["language"] == "en")
            .unwrap();
        assert_eq!(button["title"], "Buttons");
        assert_eq!(button["category"], "Actions");
        assert_eq!(button["url"], "/en/components/button/");
        assert!(!button["summary"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn generates_sitemap_and_robots() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            base_url: "/docs/".to_string(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>/docs/ko/components/button/</loc>"));
        assert!(sitemap.contains("<loc>/docs/en/home/</loc>"));
        assert!(!sitemap.contains("404"));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: /docs/sitemap.xml"));
    }

    #[tokio::test]
    async fn respects_minify_flag() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            minify: false,
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let css = fs::read_to_string(out.join("assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
    }

    #[tokio::test]
    async fn uses_content_directory() {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let out = temp.path().join("dist");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("nav.yaml"),
            "- key: action\n  items: [button, fab]\n",
        )
        .unwrap();

        let result = StaticBuilder::new(BuildConfig {
            content_dir: Some(content),
            output_dir: out.clone(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        assert_eq!(result.pages, 2 * (2 + 2) + 2);
        assert!(!out.join("en/components/card/index.html").exists());
    }

    #[tokio::test]
    async fn copies_stylesheets() {
        let temp = tempdir().unwrap();
        let style = temp.path().join("brand.css");
        let out = temp.path().join("dist");
        fs::write(&style, ":root { --md-primary: #006a6a; }").unwrap();

        StaticBuilder::new(BuildConfig {
            output_dir: out.clone(),
            styles: vec![style.to_string_lossy().to_string()],
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        assert!(out.join("assets/brand.css").exists());
        let page = fs::read_to_string(out.join("en/home/index.html"))
            .unwrap()
            .replace("&#x2f;", "/");
        assert!(page.contains(r#"href="/assets/brand.css""#));
    }

    #[tokio::test]
    async fn missing_content_directory_fails() {
        let temp = tempdir().unwrap();

        let err = StaticBuilder::new(BuildConfig {
            content_dir: Some(temp.path().join("missing")),
            output_dir: temp.path().join("dist"),
            ..Default::default()
        })
        .build()
        .await
        .unwrap_err();

        assert!(matches!(err, BuildError::ContentError(_)));
    }
}
