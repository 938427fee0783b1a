//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{ws::WebSocketUpgrade, Path, Query, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use tokio::sync::RwLock;

use swatch_content::{Catalog, ContentError, Language, Preferences, Theme};
use swatch_preview::PreviewRegistry;
use swatch_site::{AssetPipeline, LinkStyle, RenderError, RenderOptions, SiteRenderer, TemplateEngine};

use crate::live::{run_connection, LiveMessage, ReloadHub};
use crate::watcher::{FileWatcher, WatchEvent};

/// WebSocket path for live previews.
pub const LIVE_PATH: &str = "/__live";

const LANG_COOKIE: &str = "lang";
const THEME_COOKIE: &str = "theme";

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Content directory to load and watch; bundled content when unset
    pub content_dir: Option<PathBuf>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Site title; the localized title when unset
    pub title: Option<String>,

    /// Extra stylesheets, served from `/assets/`
    pub styles: Vec<PathBuf>,

    /// Language used when neither cookie nor `Accept-Language` decide
    pub default_language: Language,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
            title: None,
            styles: vec![],
            default_language: Language::default(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Failed to load content: {0}")]
    ContentError(#[from] ContentError),
}

/// Shared server state.
pub struct ServerState {
    catalog: Arc<RwLock<Catalog>>,
    previews: Arc<PreviewRegistry>,
    templates: TemplateEngine,
    options: RenderOptions,
    reload: ReloadHub,
    styles: Vec<PathBuf>,
    default_language: Language,
}

impl ServerState {
    pub fn new(catalog: Catalog, config: &DevServerConfig) -> Self {
        let mut options = RenderOptions::new(LinkStyle::Dynamic);
        options.site_title = config.title.clone();
        options.live_path = Some(LIVE_PATH.to_string());
        options.styles = config
            .styles
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .map(|name| format!("/assets/{name}"))
            .collect();

        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            previews: Arc::new(PreviewRegistry::builtin()),
            templates: TemplateEngine::new(),
            options,
            reload: ReloadHub::new(),
            styles: config.styles.clone(),
            default_language: config.default_language,
        }
    }

    pub fn reload_hub(&self) -> &ReloadHub {
        &self.reload
    }

    /// Replace the catalog and tell every client to reload.
    pub async fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write().await = catalog;
        self.reload.send(LiveMessage::Reload);
    }
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_text = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_text
            .parse()
            .map_err(|_| ServerError::InvalidAddress(addr_text.clone()))?;

        let catalog = match &self.config.content_dir {
            Some(dir) => Catalog::from_dir(dir)?,
            None => Catalog::bundled()?,
        };
        let state = Arc::new(ServerState::new(catalog, &self.config));

        // Reload content on change
        if let Some(dir) = self.config.content_dir.clone() {
            let (watcher, mut rx) = FileWatcher::new(std::slice::from_ref(&dir))
                .map_err(|e| ServerError::WatchError(e.to_string()))?;
            tracing::info!("Watching {} for changes", dir.display());

            let state = Arc::clone(&state);
            tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    handle_watch_event(&state, &dir, event).await;
                }
                // Keep watcher alive
                drop(watcher);
            });
        }

        let app = router(state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        let url = format!("http://{}", addr);
        tracing::info!("Dev server running at {}", url);

        // Open browser if configured
        if self.config.open {
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Reload the catalog after content files changed.
///
/// A catalog that fails to load leaves the previous one in place.
async fn handle_watch_event(state: &ServerState, dir: &std::path::Path, event: WatchEvent) {
    for path in &event.paths {
        tracing::info!("Content changed: {}", path.display());
    }

    match Catalog::from_dir(dir) {
        Ok(catalog) => state.replace_catalog(catalog).await,
        Err(e) => tracing::warn!("Keeping previous content: {}", e),
    }
}

/// Build the application router.
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/home", get(home_handler))
        .route("/components/{id}", get(component_handler))
        .route("/assets/{file}", get(asset_handler))
        .route(LIVE_PATH, get(ws_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Preference overrides from the query string.
#[derive(Debug, Default, Deserialize)]
struct PrefsQuery {
    lang: Option<String>,
    theme: Option<String>,
}

fn persistent_cookie(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .build()
}

/// Work out the reader's preferences.
///
/// Valid `?lang=` / `?theme=` values win and are persisted as cookies;
/// otherwise cookies, then `Accept-Language`, then the configured default.
fn negotiate(
    query: &PrefsQuery,
    jar: CookieJar,
    headers: &HeaderMap,
    default_language: Language,
) -> (Preferences, CookieJar) {
    let lang = query.lang.as_deref().and_then(Language::from_code);
    let theme = query.theme.as_deref().and_then(|t| t.parse::<Theme>().ok());

    let persisted_lang = lang
        .map(Language::code)
        .or_else(|| jar.get(LANG_COOKIE).map(Cookie::value));
    let persisted_theme = theme
        .map(Theme::as_str)
        .or_else(|| jar.get(THEME_COOKIE).map(Cookie::value));
    let environment = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let prefs = Preferences::resolve(
        persisted_lang,
        persisted_theme,
        environment,
        default_language,
    );

    let mut jar = jar;
    if let Some(lang) = lang {
        jar = jar.add(persistent_cookie(LANG_COOKIE, lang.code()));
    }
    if let Some(theme) = theme {
        jar = jar.add(persistent_cookie(THEME_COOKIE, theme.as_str()));
    }

    (prefs, jar)
}

fn page_response(
    status: StatusCode,
    jar: CookieJar,
    rendered: Result<String, RenderError>,
) -> Response {
    match rendered {
        Ok(html) => (status, jar, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// `/` forwards to the home page, keeping the query.
async fn index_handler(RawQuery(query): RawQuery) -> Redirect {
    match query {
        Some(query) => Redirect::temporary(&format!("/home?{query}")),
        None => Redirect::temporary("/home"),
    }
}

async fn home_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PrefsQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let (prefs, jar) = negotiate(&query, jar, &headers, state.default_language);
    let catalog = state.catalog.read().await;
    let renderer = SiteRenderer::new(&catalog, &state.previews, &state.templates, &state.options);

    page_response(StatusCode::OK, jar, renderer.render_home(prefs))
}

/// Unknown ids still render the generic component page.
async fn component_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Query(query): Query<PrefsQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let (prefs, jar) = negotiate(&query, jar, &headers, state.default_language);
    let catalog = state.catalog.read().await;
    let renderer = SiteRenderer::new(&catalog, &state.previews, &state.templates, &state.options);

    page_response(StatusCode::OK, jar, renderer.render_component(&id, prefs))
}

async fn not_found_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PrefsQuery>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    let (prefs, jar) = negotiate(&query, jar, &headers, state.default_language);
    let catalog = state.catalog.read().await;
    let renderer = SiteRenderer::new(&catalog, &state.previews, &state.templates, &state.options);

    page_response(StatusCode::NOT_FOUND, jar, renderer.render_not_found(prefs))
}

async fn asset_handler(
    State(state): State<Arc<ServerState>>,
    Path(file): Path<String>,
) -> Response {
    match file.as_str() {
        "main.css" => ([(header::CONTENT_TYPE, "text/css")], AssetPipeline::generate_css()).into_response(),
        "main.js" => (
            [(header::CONTENT_TYPE, "application/javascript")],
            AssetPipeline::generate_js(),
        )
            .into_response(),
        name => {
            let style = state
                .styles
                .iter()
                .find(|path| path.file_name().and_then(|f| f.to_str()) == Some(name));
            match style.map(std::fs::read_to_string) {
                Some(Ok(css)) => ([(header::CONTENT_TYPE, "text/css")], css).into_response(),
                Some(Err(e)) => {
                    tracing::warn!("Failed to read stylesheet {}: {}", name, e);
                    StatusCode::NOT_FOUND.into_response()
                }
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
    }
}

/// Handler for the live preview WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let registry = Arc::clone(&state.previews);
    let reloads = state.reload.subscribe();
    ws.on_upgrade(move |socket| run_connection(socket, registry, reloads))
}
