//! Template engine for rendering site pages.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::page::ComponentPage;

/// A sidebar link.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub href: String,
    /// Whether this is the active page
    pub active: bool,
}

/// A sidebar category with its links.
#[derive(Debug, Clone, Serialize)]
pub struct NavGroup {
    pub title: String,
    pub items: Vec<NavItem>,
}

/// Localized interface strings used by the page chrome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Labels {
    pub search: String,
    pub toggle_menu: String,
    pub toggle_theme: String,
    pub toggle_language: String,
    pub scroll_top: String,
    pub on_this_page: String,
    pub copy: String,
    pub copied: String,
    pub previous: String,
    pub next: String,
}

/// Everything around the page body: head, top bar and sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct Chrome {
    /// Language code for `<html lang>`
    pub lang: &'static str,
    /// `light` or `dark`
    pub theme: &'static str,
    pub site_title: String,
    /// Page title for `<title>`
    pub title: String,
    pub description: String,
    /// Link to the home page in the current language
    pub home_href: String,
    /// Same page in the other language
    pub language_href: String,
    /// Code of the other language
    pub other_lang: &'static str,
    /// Prefix for `main.css` and `main.js`
    pub assets_url: String,
    /// Extra stylesheets
    pub styles: Vec<String>,
    pub nav: Vec<NavGroup>,
    pub labels: Labels,
    /// Websocket path for live previews, if the page is served live
    pub live: Option<String>,
}

/// A feature card on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

/// Body of the home page.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
    pub title: String,
    pub intro: String,
    pub features: Vec<Feature>,
    pub cta_label: String,
    pub cta_href: String,
}

/// Body of the not-found page.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundContent {
    pub code: String,
    pub title: String,
    pub body: String,
    pub link_label: String,
    pub link_href: String,
}

/// A neighbouring page link with its resolved URL.
#[derive(Debug, Clone, Serialize)]
pub struct PagerLink {
    pub title: String,
    pub href: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");
        env.add_template_owned("topbar.html".to_string(), TOPBAR_TEMPLATE.to_string())
            .expect("Failed to add topbar template");
        env.add_template_owned("sidebar.html".to_string(), SIDEBAR_TEMPLATE.to_string())
            .expect("Failed to add sidebar template");
        env.add_template_owned("component.html".to_string(), COMPONENT_TEMPLATE.to_string())
            .expect("Failed to add component template");
        env.add_template_owned("home.html".to_string(), HOME_TEMPLATE.to_string())
            .expect("Failed to add home template");
        env.add_template_owned("not_found.html".to_string(), NOT_FOUND_TEMPLATE.to_string())
            .expect("Failed to add not-found template");
        env.add_template_owned("redirect.html".to_string(), REDIRECT_TEMPLATE.to_string())
            .expect("Failed to add redirect template");

        Self { env }
    }

    /// Render a component detail page.
    pub fn render_component(
        &self,
        chrome: &Chrome,
        page: &ComponentPage,
        previous: Option<&PagerLink>,
        next: Option<&PagerLink>,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("component.html")?;

        tmpl.render(context! {
            chrome => chrome,
            page => page,
            previous => previous,
            next => next,
        })
    }

    /// Render the landing page.
    pub fn render_home(
        &self,
        chrome: &Chrome,
        home: &HomeContent,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("home.html")?;

        tmpl.render(context! {
            chrome => chrome,
            home => home,
        })
    }

    /// Render the not-found page.
    pub fn render_not_found(
        &self,
        chrome: &Chrome,
        content: &NotFoundContent,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("not_found.html")?;

        tmpl.render(context! {
            chrome => chrome,
            content => content,
        })
    }

    /// Render the root page that forwards to a language.
    ///
    /// The script prefers the `lang` cookie, then the browser language,
    /// then `fallback`.
    pub fn render_redirect(
        &self,
        base_url: &str,
        fallback: &str,
        languages: &[&str],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("redirect.html")?;

        tmpl.render(context! {
            base_url => base_url,
            fallback => fallback,
            languages => languages,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ chrome.lang }}"{% if chrome.theme == "dark" %} class="dark"{% endif %}>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% if chrome.title %}{{ chrome.title }} - {% endif %}{{ chrome.site_title }}</title>
  <meta name="description" content="{{ chrome.description }}">
  <script>
    if (document.cookie.split('; ').indexOf('theme=dark') !== -1) document.documentElement.classList.add('dark');
  </script>
  <link rel="stylesheet" href="{{ chrome.assets_url }}main.css">
  {% for style in chrome.styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body{% if chrome.live %} data-live="{{ chrome.live }}"{% endif %}>
  {% include "topbar.html" %}
  <div class="layout">
    <nav class="sidebar" aria-label="{{ chrome.site_title }}">
      {% include "sidebar.html" %}
    </nav>
    {% block main %}{% endblock %}
  </div>
  <button type="button" class="scroll-top" data-scroll-top aria-label="{{ chrome.labels.scroll_top }}">↑</button>
  <script src="{{ chrome.assets_url }}main.js"></script>
</body>
</html>"##;

const TOPBAR_TEMPLATE: &str = r##"<header class="topbar">
  <button type="button" class="topbar__action menu-btn" data-sidebar-toggle aria-label="{{ chrome.labels.toggle_menu }}">☰</button>
  <a href="{{ chrome.home_href }}" class="topbar__title">{{ chrome.site_title }}</a>
  <a href="{{ chrome.language_href }}" class="topbar__action" data-lang="{{ chrome.other_lang }}" hreflang="{{ chrome.other_lang }}">{{ chrome.labels.toggle_language }}</a>
  <button type="button" class="topbar__action" data-theme-toggle aria-label="{{ chrome.labels.toggle_theme }}">◐</button>
</header>"##;

const SIDEBAR_TEMPLATE: &str = r##"{% for group in chrome.nav %}
<div class="nav-group">
  <div class="nav-group__title">{{ group.title }}</div>
  <ul class="nav-list">
  {% for item in group.items %}
    <li class="nav-item{% if item.active %} active{% endif %}">
      <a href="{{ item.href }}"{% if item.active %} aria-current="page"{% endif %}>{{ item.title }}</a>
    </li>
  {% endfor %}
  </ul>
</div>
{% endfor %}"##;

const COMPONENT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block main %}
<main class="main">
<article class="doc">
  <p class="doc__eyebrow">{{ page.eyebrow }}</p>
  <h1 class="doc__title">{{ page.title }}</h1>

  {% for section in page.sections %}
  <section class="doc-section" id="{{ section.id }}">
    <h2>{{ section.title }}</h2>
    {% set body = section.body %}
    {% if body.kind == "markdown" %}
      {{ body.html | safe }}
    {% elif body.kind == "gallery" %}
      {% for card in body.cards %}
      <div class="example" id="example-{{ card.number }}">
        <div class="example__header">
          <span class="example__number">{{ card.label }}</span>
          <h3 class="example__title">{{ card.title }}</h3>
        </div>
        <div class="example__preview" data-instance="{{ card.instance }}" data-component="{{ card.component }}" data-variant="{{ card.variant }}">{{ card.preview_html | safe }}</div>
        <div class="code-tabs" data-code-tabs>
          <div class="code-tabs__bar" role="tablist">
          {% for snippet in card.snippets %}
            <button type="button" role="tab" class="code-tabs__tab" data-tab="{{ snippet.framework }}" aria-selected="{{ loop.first }}">{{ snippet.label }}</button>
          {% endfor %}
          </div>
          {% for snippet in card.snippets %}
          <div class="code-tabs__panel" data-panel="{{ snippet.framework }}"{% if not loop.first %} hidden{% endif %}>
            <button type="button" class="copy-btn" data-copy data-copied="{{ chrome.labels.copied }}">{{ chrome.labels.copy }}</button>
            <pre><code class="language-{{ snippet.language }}">{{ snippet.code }}</code></pre>
          </div>
          {% endfor %}
        </div>
      </div>
      {% endfor %}
    {% elif body.kind == "single_preview" %}
      <div class="example">
        <div class="example__preview" data-instance="{{ body.instance }}" data-component="{{ body.component }}" data-variant="0">{{ body.preview_html | safe }}</div>
      </div>
    {% elif body.kind == "message" %}
      <p class="empty-state">{{ body.text }}</p>
    {% elif body.kind == "items" %}
      <ul class="item-list">
      {% for item in body.items %}
        <li>
          <div class="item-list__name">{{ item.name | safe }}</div>
          {% if item.description %}<div class="item-list__description">{{ item.description | safe }}</div>{% endif %}
        </li>
      {% endfor %}
      </ul>
    {% elif body.kind == "specs" %}
      <table class="spec-table">
        <thead><tr><th>{{ body.property_label }}</th><th>{{ body.value_label }}</th></tr></thead>
        <tbody>
        {% for row in body.rows %}
          <tr><td>{{ row.property | safe }}</td><td>{{ row.value | safe }}</td></tr>
        {% endfor %}
        </tbody>
      </table>
    {% elif body.kind == "list" %}
      <ul class="{% if body.tone == "plain" %}bullet-list{% else %}tone-list tone-list--{{ body.tone }}{% endif %}">
      {% for item in body.items %}
        <li>{{ item | safe }}</li>
      {% endfor %}
      </ul>
    {% endif %}
  </section>
  {% endfor %}

  {% if previous or next %}
  <nav class="pager">
    {% if previous %}<a class="pager__link" href="{{ previous.href }}" rel="prev"><span class="pager__label">{{ chrome.labels.previous }}</span>{{ previous.title }}</a>{% endif %}
    {% if next %}<a class="pager__link pager__link--next" href="{{ next.href }}" rel="next"><span class="pager__label">{{ chrome.labels.next }}</span>{{ next.title }}</a>{% endif %}
  </nav>
  {% endif %}
</article>

<aside class="toc">
  <h2>{{ chrome.labels.on_this_page }}</h2>
  <ul>
  {% for entry in page.toc %}
    <li><a href="#{{ entry.id }}">{{ entry.title }}</a></li>
  {% endfor %}
  </ul>
</aside>
</main>
{% endblock %}"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block main %}
<main class="main main--wide">
<div class="doc">
  <section class="hero">
    <h1>{{ home.title }}</h1>
    <p>{{ home.intro }}</p>
  </section>
  <div class="features">
  {% for feature in home.features %}
    <div class="feature">
      <h2>{{ feature.title }}</h2>
      <p>{{ feature.body }}</p>
      {% if loop.first %}<p><a href="{{ home.cta_href }}">{{ home.cta_label }} →</a></p>{% endif %}
    </div>
  {% endfor %}
  </div>
</div>
</main>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block main %}
<main class="main main--wide">
<div class="not-found">
  <p class="not-found__code">{{ content.code }}</p>
  <h1>{{ content.title }}</h1>
  <p>{{ content.body }}</p>
  <p><a href="{{ content.link_href }}">{{ content.link_label }}</a></p>
</div>
</main>
{% endblock %}"##;

const REDIRECT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta http-equiv="refresh" content="0; url={{ base_url }}{{ fallback }}/home/">
  <link rel="canonical" href="{{ base_url }}{{ fallback }}/home/">
  <script>
    (function() {
      var supported = {{ languages | tojson }};
      var match = document.cookie.match(/(?:^|; )lang=([^;]*)/);
      var lang = match ? decodeURIComponent(match[1]) : '';
      if (supported.indexOf(lang) === -1) {
        var hint = (navigator.language || '').toLowerCase();
        lang = hint ? (hint.indexOf('ko') === 0 ? 'ko' : 'en') : {{ fallback | tojson }};
      }
      if (supported.indexOf(lang) === -1) lang = {{ fallback | tojson }};
      location.replace({{ base_url | tojson }} + lang + '/home/');
    })();
  </script>
</head>
<body></body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Section, SectionBody, SectionId, TocEntry};

    fn chrome() -> Chrome {
        Chrome {
            lang: "en",
            theme: "light",
            site_title: "Material Design".to_string(),
            title: "Buttons".to_string(),
            description: "Buttons let people act.".to_string(),
            home_href: "/home".to_string(),
            language_href: "?lang=ko".to_string(),
            other_lang: "ko",
            assets_url: "/assets/".to_string(),
            styles: vec![],
            nav: vec![NavGroup {
                title: "Actions".to_string(),
                items: vec![
                    NavItem {
                        title: "Buttons".to_string(),
                        href: "/components/button".to_string(),
                        active: true,
                    },
                    NavItem {
                        title: "FAB".to_string(),
                        href: "/components/fab".to_string(),
                        active: false,
                    },
                ],
            }],
            labels: Labels {
                copy: "Copy".to_string(),
                copied: "Copied!".to_string(),
                on_this_page: "On this page".to_string(),
                ..Labels::default()
            },
            live: None,
        }
    }

    fn page(sections: Vec<Section>) -> ComponentPage {
        let toc = sections
            .iter()
            .map(|s| TocEntry {
                id: s.id,
                title: s.title.clone(),
            })
            .collect();
        ComponentPage {
            id: "button".to_string(),
            known: true,
            title: "Buttons".to_string(),
            eyebrow: "Actions".to_string(),
            summary: String::new(),
            sections,
            toc,
            previous: None,
            next: None,
        }
    }

    #[test]
    fn renders_component_page() {
        let engine = TemplateEngine::new();
        let page = page(vec![Section {
            kind: SectionId::Overview,
            id: "overview",
            title: "Overview".to_string(),
            body: SectionBody::Markdown {
                html: "<p>Hello <strong>world</strong></p>".to_string(),
            },
        }]);
        let next = PagerLink {
            title: "FAB".to_string(),
            href: "/components/fab".to_string(),
        };

        let html = engine
            .render_component(&chrome(), &page, None, Some(&next))
            .unwrap();

        assert!(html.contains("<title>Buttons - Material Design</title>"));
        assert!(html.contains("<p>Hello <strong>world</strong></p>"));
        assert!(html.contains(r##"<a href="#overview">Overview</a>"##));
        assert!(html.contains(r#"rel="next""#));
        assert!(!html.contains(r#"rel="prev""#));
        assert!(html.contains(r#"aria-current="page""#));
    }

    #[test]
    fn escapes_snippet_code() {
        let engine = TemplateEngine::new();
        let page = page(vec![Section {
            kind: SectionId::Examples,
            id: "examples",
            title: "Examples".to_string(),
            body: SectionBody::Gallery {
                cards: vec![crate::page::ExampleCard {
                    number: 1,
                    label: "Example 1".to_string(),
                    title: "Filled".to_string(),
                    instance: "button--0".to_string(),
                    component: "button".to_string(),
                    variant: 0,
                    preview_html: r#"<button class="sw-btn">Go</button>"#.to_string(),
                    snippets: vec![crate::page::SnippetView {
                        framework: "react",
                        label: "React",
                        language: "tsx",
                        code: "<Button variant=\"filled\" />".to_string(),
                    }],
                }],
            },
        }]);

        let html = engine.render_component(&chrome(), &page, None, None).unwrap();

        assert!(html.contains(r#"<button class="sw-btn">Go</button>"#));
        assert!(html.contains("&lt;Button variant=&quot;filled&quot;"));
        assert!(html.contains(r#"data-instance="button--0""#));
        assert!(html.contains(r#"data-copied="Copied!""#));
    }

    #[test]
    fn dark_theme_and_live_socket() {
        let engine = TemplateEngine::new();
        let mut chrome = chrome();
        chrome.theme = "dark";
        chrome.live = Some("/__live".to_string());

        let html = engine.render_component(&chrome, &page(vec![]), None, None).unwrap();

        assert!(html.contains(r#"<html lang="en" class="dark">"#));
        // Attribute values are HTML-escaped, slashes included.
        let html = html.replace("&#x2f;", "/");
        assert!(html.contains(r#"data-live="/__live""#));
    }

    #[test]
    fn redirect_page_targets_fallback() {
        let engine = TemplateEngine::new();
        let html = engine.render_redirect("/docs/", "ko", &["ko", "en"]).unwrap();

        assert!(html.contains(r#"var supported = ["ko","en"];"#));
        assert!(html.contains(r#""/docs/" + lang"#));
    }
}
