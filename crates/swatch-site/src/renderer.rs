//! Full-page rendering shared by the static builder and the dev server.

use swatch_content::{Catalog, Language, Preferences};
use swatch_preview::PreviewRegistry;

use crate::page::{ComponentPage, PageAssembler, PageLink};
use crate::templates::{
    Chrome, Feature, HomeContent, Labels, NavGroup, NavItem, NotFoundContent, PagerLink,
    TemplateEngine,
};

/// Component linked from the home page call to action.
const FEATURED_COMPONENT: &str = "button";

/// Errors that can occur while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// How pages link to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStyle {
    /// Pre-rendered files under `{base_url}{lang}/`
    Static { base_url: String },
    /// Live routes; the language is switched with `?lang=`
    Dynamic,
}

/// The page being rendered, for language-switch links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    Component(&'a str),
    NotFound,
}

impl LinkStyle {
    pub fn home(&self, language: Language) -> String {
        match self {
            Self::Static { base_url } => format!("{base_url}{language}/home/"),
            Self::Dynamic => "/home".to_string(),
        }
    }

    pub fn component(&self, language: Language, id: &str) -> String {
        match self {
            Self::Static { base_url } => format!("{base_url}{language}/components/{id}/"),
            Self::Dynamic => format!("/components/{id}"),
        }
    }

    /// Directory holding `main.css` and `main.js`.
    pub fn assets(&self) -> String {
        match self {
            Self::Static { base_url } => format!("{base_url}assets/"),
            Self::Dynamic => "/assets/".to_string(),
        }
    }

    /// Link to `route` rendered in `language`.
    pub fn switch_language(&self, route: Route<'_>, language: Language) -> String {
        match (self, route) {
            (Self::Static { .. }, Route::Component(id)) => self.component(language, id),
            (Self::Static { .. }, _) => self.home(language),
            (Self::Dynamic, Route::Component(id)) => format!("/components/{id}?lang={language}"),
            (Self::Dynamic, _) => format!("/home?lang={language}"),
        }
    }
}

/// Rendering options fixed for a build or a server run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub links: LinkStyle,
    /// Overrides the localized site title
    pub site_title: Option<String>,
    /// Extra stylesheets added to every page
    pub styles: Vec<String>,
    /// Websocket path for live previews
    pub live_path: Option<String>,
}

impl RenderOptions {
    pub fn new(links: LinkStyle) -> Self {
        Self {
            links,
            site_title: None,
            styles: Vec::new(),
            live_path: None,
        }
    }
}

/// Renders complete HTML pages from the catalog.
pub struct SiteRenderer<'a> {
    catalog: &'a Catalog,
    previews: &'a PreviewRegistry,
    templates: &'a TemplateEngine,
    options: &'a RenderOptions,
}

impl<'a> SiteRenderer<'a> {
    pub fn new(
        catalog: &'a Catalog,
        previews: &'a PreviewRegistry,
        templates: &'a TemplateEngine,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            catalog,
            previews,
            templates,
            options,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Assemble the page model for `id`.
    pub fn component(&self, id: &str, language: Language) -> ComponentPage {
        PageAssembler::new(self.catalog, self.previews).assemble(id, language)
    }

    /// Render an assembled component page.
    pub fn render_page(
        &self,
        page: &ComponentPage,
        prefs: Preferences,
    ) -> Result<String, RenderError> {
        let links = &self.options.links;
        let pager = |link: &Option<PageLink>| {
            link.as_ref().map(|l| PagerLink {
                title: l.title.clone(),
                href: links.component(prefs.language, &l.id),
            })
        };
        let previous = pager(&page.previous);
        let next = pager(&page.next);

        let chrome = self.chrome(
            prefs,
            page.title.clone(),
            page.summary.clone(),
            Route::Component(&page.id),
        );

        Ok(self
            .templates
            .render_component(&chrome, page, previous.as_ref(), next.as_ref())?)
    }

    /// Assemble and render the page for `id`.
    pub fn render_component(&self, id: &str, prefs: Preferences) -> Result<String, RenderError> {
        let page = self.component(id, prefs.language);
        self.render_page(&page, prefs)
    }

    pub fn render_home(&self, prefs: Preferences) -> Result<String, RenderError> {
        let t = self.catalog.localizer(prefs.language);
        let featured = if self.catalog.entry(FEATURED_COMPONENT).is_some() {
            Some(FEATURED_COMPONENT)
        } else {
            self.catalog.entries().next().map(|(_, e)| e.id.as_str())
        };

        let home = HomeContent {
            title: t.t("home.title"),
            intro: t.t("home.intro"),
            features: ["explore", "responsive", "theme", "language"]
                .iter()
                .map(|key| Feature {
                    title: t.t(&format!("home.{key}Title")),
                    body: t.t(&format!("home.{key}Body")),
                })
                .collect(),
            cta_label: t.t("home.exploreLink"),
            cta_href: match featured {
                Some(id) => self.options.links.component(prefs.language, id),
                None => self.options.links.home(prefs.language),
            },
        };

        let chrome = self.chrome(prefs, String::new(), home.intro.clone(), Route::Home);
        Ok(self.templates.render_home(&chrome, &home)?)
    }

    pub fn render_not_found(&self, prefs: Preferences) -> Result<String, RenderError> {
        let t = self.catalog.localizer(prefs.language);
        let content = NotFoundContent {
            code: t.t("notFound.code"),
            title: t.t("notFound.title"),
            body: t.t("notFound.body"),
            link_label: t.t("notFound.link"),
            link_href: self.options.links.home(prefs.language),
        };

        let chrome = self.chrome(
            prefs,
            content.title.clone(),
            content.body.clone(),
            Route::NotFound,
        );
        Ok(self.templates.render_not_found(&chrome, &content)?)
    }

    /// Render the root page forwarding readers to a language.
    pub fn render_redirect(&self, fallback: Language) -> Result<String, RenderError> {
        let base_url = match &self.options.links {
            LinkStyle::Static { base_url } => base_url.as_str(),
            LinkStyle::Dynamic => "/",
        };
        let languages: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        Ok(self
            .templates
            .render_redirect(base_url, fallback.code(), &languages)?)
    }

    fn chrome(
        &self,
        prefs: Preferences,
        title: String,
        description: String,
        route: Route<'_>,
    ) -> Chrome {
        let language = prefs.language;
        let t = self.catalog.localizer(language);
        let links = &self.options.links;
        let active = match route {
            Route::Component(id) => Some(id),
            _ => None,
        };

        Chrome {
            lang: language.code(),
            theme: prefs.theme.as_str(),
            site_title: self
                .options
                .site_title
                .clone()
                .unwrap_or_else(|| t.t("site.title")),
            title,
            description,
            home_href: links.home(language),
            language_href: links.switch_language(route, language.toggled()),
            other_lang: language.toggled().code(),
            assets_url: links.assets(),
            styles: self.options.styles.clone(),
            nav: self.nav(language, active),
            labels: Labels {
                search: t.t("site.search"),
                toggle_menu: t.t("site.toggleMenu"),
                toggle_theme: t.t("site.toggleTheme"),
                toggle_language: t.t("site.toggleLanguage"),
                scroll_top: t.t("site.scrollTop"),
                on_this_page: t.t("page.onThisPage"),
                copy: t.t("page.copy"),
                copied: t.t("page.copied"),
                previous: t.t("page.previous"),
                next: t.t("page.next"),
            },
            live: self.options.live_path.clone(),
        }
    }

    fn nav(&self, language: Language, active: Option<&str>) -> Vec<NavGroup> {
        self.catalog
            .navigation()
            .iter()
            .map(|category| NavGroup {
                title: self.catalog.category_name(language, &category.key),
                items: category
                    .items
                    .iter()
                    .map(|entry| NavItem {
                        title: self.catalog.component_name(language, entry.id.as_str()),
                        href: self.options.links.component(language, entry.id.as_str()),
                        active: active == Some(entry.id.as_str()),
                    })
                    .collect(),
            })
            .collect()
    }
}
