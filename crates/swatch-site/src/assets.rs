//! Asset pipeline for CSS and JavaScript processing.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        let mut css = String::with_capacity(SITE_CSS.len() + PREVIEW_CSS.len() + 1);
        css.push_str(SITE_CSS);
        css.push('\n');
        css.push_str(PREVIEW_CSS);
        css
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Material 3 baseline palette; `html.dark` swaps the color roles.
const SITE_CSS: &str = r#"/* swatch site theme */
:root {
  --sidebar-width: 280px;
  --toc-width: 200px;
  --topbar-height: 64px;
  --content-max-width: 880px;

  --md-primary: #6750a4;
  --md-on-primary: #ffffff;
  --md-primary-container: #eaddff;
  --md-on-primary-container: #21005d;
  --md-secondary-container: #e8def8;
  --md-on-secondary-container: #1d192b;
  --md-error: #b3261e;
  --md-on-error: #ffffff;
  --md-surface: #fef7ff;
  --md-surface-container: #f3edf7;
  --md-surface-container-high: #ece6f0;
  --md-on-surface: #1d1b20;
  --md-on-surface-variant: #49454f;
  --md-outline: #79747e;
  --md-outline-variant: #cac4d0;
  --md-inverse-surface: #322f35;
  --md-inverse-on-surface: #f5eff7;
  --md-inverse-primary: #d0bcff;
  --md-scrim: rgba(0, 0, 0, 0.32);
  --md-success: #386a20;

  --radius-s: 8px;
  --radius-m: 12px;
  --radius-l: 16px;
  --radius-full: 9999px;
  --font-sans: "Roboto", "Noto Sans KR", system-ui, -apple-system, sans-serif;
  --font-mono: "Roboto Mono", ui-monospace, monospace;
}

html.dark {
  --md-primary: #d0bcff;
  --md-on-primary: #381e72;
  --md-primary-container: #4f378b;
  --md-on-primary-container: #eaddff;
  --md-secondary-container: #4a4458;
  --md-on-secondary-container: #e8def8;
  --md-error: #f2b8b5;
  --md-on-error: #601410;
  --md-surface: #141218;
  --md-surface-container: #211f26;
  --md-surface-container-high: #2b2930;
  --md-on-surface: #e6e0e9;
  --md-on-surface-variant: #cac4d0;
  --md-outline: #938f99;
  --md-outline-variant: #49454f;
  --md-inverse-surface: #e6e0e9;
  --md-inverse-on-surface: #322f35;
  --md-inverse-primary: #6750a4;
  --md-success: #9ed582;
  color-scheme: dark;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--md-surface);
  color: var(--md-on-surface);
  line-height: 1.6;
}

a {
  color: var(--md-primary);
}

/* Top bar */
.topbar {
  position: sticky;
  top: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  height: var(--topbar-height);
  padding: 0 1rem;
  background: var(--md-surface-container);
  border-bottom: 1px solid var(--md-outline-variant);
}

.topbar__title {
  flex: 1;
  font-size: 1.25rem;
  font-weight: 500;
  color: var(--md-on-surface);
  text-decoration: none;
}

.topbar__action {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 40px;
  height: 40px;
  padding: 0 0.75rem;
  border: none;
  border-radius: var(--radius-full);
  background: transparent;
  color: var(--md-on-surface-variant);
  font: inherit;
  text-decoration: none;
  cursor: pointer;
}

.topbar__action:hover {
  background: var(--md-surface-container-high);
}

.menu-btn {
  display: none;
}

.layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  min-height: calc(100vh - var(--topbar-height));
}

/* Sidebar */
.sidebar {
  position: sticky;
  top: var(--topbar-height);
  height: calc(100vh - var(--topbar-height));
  overflow-y: auto;
  padding: 1rem 0.75rem;
  background: var(--md-surface-container);
}

.nav-group + .nav-group {
  margin-top: 1rem;
}

.nav-group__title {
  padding: 0 1rem 0.25rem;
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--md-on-surface-variant);
}

.nav-list {
  list-style: none;
}

.nav-item a {
  display: block;
  padding: 0.5rem 1rem;
  border-radius: var(--radius-full);
  color: var(--md-on-surface-variant);
  text-decoration: none;
  transition: background 0.15s, color 0.15s;
}

.nav-item a:hover {
  background: var(--md-surface-container-high);
}

.nav-item.active > a {
  background: var(--md-secondary-container);
  color: var(--md-on-secondary-container);
  font-weight: 500;
}

/* Main content */
.main {
  display: grid;
  grid-template-columns: minmax(0, 1fr) var(--toc-width);
  gap: 2rem;
  padding: 2rem;
  max-width: calc(var(--content-max-width) + var(--toc-width) + 4rem);
}

.main--wide {
  grid-template-columns: minmax(0, 1fr);
}

.doc {
  max-width: var(--content-max-width);
}

.doc__eyebrow {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--md-primary);
}

.doc__title {
  font-size: 2.5rem;
  font-weight: 400;
  margin-bottom: 1.5rem;
}

.doc-section {
  scroll-margin-top: calc(var(--topbar-height) + 1rem);
  margin-bottom: 2.5rem;
}

.doc-section > h2 {
  font-size: 1.5rem;
  font-weight: 500;
  margin-bottom: 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--md-outline-variant);
}

.doc-section p {
  margin-bottom: 1rem;
}

.doc-section ul {
  padding-left: 1.25rem;
}

.doc-section li {
  margin-bottom: 0.5rem;
}

.doc-section code {
  font-family: var(--font-mono);
  font-size: 0.875em;
  padding: 0.125rem 0.375rem;
  border-radius: 4px;
  background: var(--md-surface-container-high);
}

.item-list {
  display: grid;
  gap: 0.75rem;
  list-style: none;
  padding: 0;
}

.doc-section .item-list {
  padding-left: 0;
}

.item-list__name {
  font-weight: 500;
}

.item-list__description {
  color: var(--md-on-surface-variant);
}

.tone-list {
  list-style: none;
  padding: 1rem 1.25rem;
  border-left: 4px solid var(--md-outline);
  border-radius: var(--radius-s);
  background: var(--md-surface-container);
}

.tone-list--do {
  border-left-color: var(--md-success);
}

.tone-list--dont {
  border-left-color: var(--md-error);
}

.spec-table {
  width: 100%;
  border-collapse: collapse;
}

.spec-table th,
.spec-table td {
  padding: 0.5rem 0.75rem;
  text-align: left;
  border-bottom: 1px solid var(--md-outline-variant);
}

.spec-table th {
  font-weight: 500;
  color: var(--md-on-surface-variant);
}

.empty-state {
  padding: 2rem;
  text-align: center;
  color: var(--md-on-surface-variant);
  border: 1px dashed var(--md-outline-variant);
  border-radius: var(--radius-m);
}

/* Examples */
.example {
  margin-bottom: 1.5rem;
  border: 1px solid var(--md-outline-variant);
  border-radius: var(--radius-m);
  overflow: hidden;
}

.example__header {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  background: var(--md-surface-container);
}

.example__number {
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--md-primary);
}

.example__title {
  font-size: 1rem;
  font-weight: 500;
}

.example__preview {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 160px;
  padding: 2rem;
}

.code-tabs__bar {
  display: flex;
  gap: 0.25rem;
  padding: 0 0.5rem;
  border-top: 1px solid var(--md-outline-variant);
  background: var(--md-surface-container);
}

.code-tabs__tab {
  padding: 0.5rem 0.75rem;
  border: none;
  border-bottom: 2px solid transparent;
  background: transparent;
  color: var(--md-on-surface-variant);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
}

.code-tabs__tab[aria-selected="true"] {
  border-bottom-color: var(--md-primary);
  color: var(--md-primary);
}

.code-tabs__panel {
  position: relative;
}

.code-tabs__panel pre {
  margin: 0;
  padding: 1rem;
  overflow-x: auto;
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  line-height: 1.5;
  background: var(--md-inverse-surface);
  color: var(--md-inverse-on-surface);
}

.copy-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 500;
  border: none;
  border-radius: var(--radius-full);
  background: var(--md-primary-container);
  color: var(--md-on-primary-container);
  cursor: pointer;
}

.copy-btn:focus-visible {
  outline: 2px solid var(--md-primary);
  outline-offset: 2px;
}

/* Table of contents */
.toc {
  position: sticky;
  top: calc(var(--topbar-height) + 2rem);
  align-self: start;
}

.toc h2 {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--md-on-surface-variant);
  margin-bottom: 0.75rem;
}

.toc ul {
  list-style: none;
}

.toc li {
  margin-bottom: 0.25rem;
}

.toc a {
  font-size: 0.875rem;
  color: var(--md-on-surface-variant);
  text-decoration: none;
}

.toc a:hover {
  color: var(--md-on-surface);
}

.pager {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 3rem;
}

.pager__link {
  display: flex;
  flex-direction: column;
  padding: 0.75rem 1rem;
  border: 1px solid var(--md-outline-variant);
  border-radius: var(--radius-m);
  text-decoration: none;
}

.pager__link--next {
  margin-left: auto;
  text-align: right;
}

.pager__label {
  font-size: 0.75rem;
  color: var(--md-on-surface-variant);
}

/* Home and not-found */
.hero {
  padding: 3rem 0 2rem;
}

.hero h1 {
  font-size: 3rem;
  font-weight: 400;
}

.hero p {
  max-width: 640px;
  margin-top: 1rem;
  color: var(--md-on-surface-variant);
}

.features {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1rem;
}

.feature {
  padding: 1.5rem;
  border-radius: var(--radius-l);
  background: var(--md-surface-container);
}

.feature h2 {
  font-size: 1.125rem;
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.not-found {
  padding: 4rem 0;
  text-align: center;
}

.not-found__code {
  font-size: 6rem;
  font-weight: 300;
  color: var(--md-primary);
}

.scroll-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  width: 48px;
  height: 48px;
  border: none;
  border-radius: var(--radius-l);
  background: var(--md-primary-container);
  color: var(--md-on-primary-container);
  font-size: 1.25rem;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.2s;
}

.scroll-top.visible {
  opacity: 1;
  pointer-events: auto;
}

@media (max-width: 1024px) {
  .layout {
    grid-template-columns: 1fr;
  }

  .menu-btn {
    display: inline-flex;
  }

  .sidebar {
    position: fixed;
    left: -100%;
    z-index: 50;
    width: var(--sidebar-width);
    transition: left 0.3s;
  }

  body.sidebar-open .sidebar {
    left: 0;
  }

  .main {
    grid-template-columns: 1fr;
    padding: 1rem;
  }

  .toc {
    display: none;
  }
}
"#;

const PREVIEW_CSS: &str = r#"/* Live preview components */
.sw-preview-row {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
}

.sw-preview-stack {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  width: 100%;
}

.sw-preview-placeholder {
  color: var(--md-on-surface-variant);
  font-size: 1.25rem;
}

.sw-caption {
  font-size: 0.875rem;
  color: var(--md-on-surface-variant);
}

.sw-caption--error {
  color: var(--md-error);
}

.sw-icon {
  font-family: "Material Symbols Outlined", "Material Icons", sans-serif;
  font-size: 1.25rem;
  line-height: 1;
}

.sw-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  height: 40px;
  padding: 0 1.5rem;
  border: none;
  border-radius: var(--radius-full);
  font: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
}

.sw-btn--elevated {
  background: var(--md-surface-container);
  color: var(--md-primary);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
}

.sw-btn--filled {
  background: var(--md-primary);
  color: var(--md-on-primary);
}

.sw-btn--tonal {
  background: var(--md-secondary-container);
  color: var(--md-on-secondary-container);
}

.sw-btn--outlined {
  background: transparent;
  color: var(--md-primary);
  border: 1px solid var(--md-outline);
}

.sw-btn--text {
  background: transparent;
  color: var(--md-primary);
  padding: 0 0.75rem;
}

.sw-btn--danger {
  background: var(--md-error);
  color: var(--md-on-error);
}

.sw-btn.is-disabled,
.sw-btn:disabled {
  opacity: 0.38;
  cursor: default;
}

.sw-fab {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  width: 56px;
  height: 56px;
  border: none;
  border-radius: var(--radius-l);
  background: var(--md-primary-container);
  color: var(--md-on-primary-container);
  box-shadow: 0 3px 6px rgba(0, 0, 0, 0.25);
  cursor: pointer;
}

.sw-fab--small {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-m);
}

.sw-fab--large {
  width: 96px;
  height: 96px;
  border-radius: 28px;
}

.sw-fab--extended {
  width: auto;
  padding: 0 1.25rem;
}

.sw-icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border: none;
  border-radius: var(--radius-full);
  background: transparent;
  color: var(--md-on-surface-variant);
  cursor: pointer;
}

.sw-icon-btn--filled {
  background: var(--md-primary);
  color: var(--md-on-primary);
}

.sw-icon-btn--tonal {
  background: var(--md-secondary-container);
  color: var(--md-on-secondary-container);
}

.sw-icon-btn--outlined {
  border: 1px solid var(--md-outline);
}

.sw-icon-btn.is-selected {
  color: var(--md-primary);
}

.sw-segmented {
  display: inline-flex;
  border: 1px solid var(--md-outline);
  border-radius: var(--radius-full);
  overflow: hidden;
}

.sw-segment {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.5rem 1rem;
  border: none;
  background: transparent;
  color: var(--md-on-surface);
  font: inherit;
  cursor: pointer;
}

.sw-segment + .sw-segment {
  border-left: 1px solid var(--md-outline);
}

.sw-segment.is-selected {
  background: var(--md-secondary-container);
  color: var(--md-on-secondary-container);
}

.sw-badge-anchor {
  position: relative;
  display: inline-flex;
}

.sw-badge {
  position: absolute;
  top: -4px;
  right: -4px;
  background: var(--md-error);
  color: var(--md-on-error);
  border-radius: var(--radius-full);
}

.sw-badge--small {
  width: 6px;
  height: 6px;
}

.sw-badge--large {
  min-width: 16px;
  height: 16px;
  padding: 0 4px;
  font-size: 0.6875rem;
  line-height: 16px;
  text-align: center;
  transform: translate(40%, -20%);
}

.sw-progress {
  position: relative;
  overflow: hidden;
}

.sw-progress--linear {
  width: 240px;
  height: 4px;
  border-radius: 2px;
  background: var(--md-secondary-container);
}

.sw-progress--linear .sw-progress__indicator {
  height: 100%;
  width: calc(var(--progress, 0.4) * 100%);
  background: var(--md-primary);
}

.sw-progress--circular {
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: 4px solid var(--md-secondary-container);
}

.sw-progress--circular .sw-progress__indicator {
  position: absolute;
  inset: -4px;
  border-radius: 50%;
  border: 4px solid transparent;
  border-top-color: var(--md-primary);
}

.sw-progress.is-indeterminate .sw-progress__indicator {
  animation: sw-spin 1s linear infinite;
}

@keyframes sw-spin {
  to {
    transform: rotate(360deg);
  }
}

.sw-snackbar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  min-width: 288px;
  padding: 0.25rem 0.5rem 0.25rem 1rem;
  border-radius: 4px;
  background: var(--md-inverse-surface);
  color: var(--md-inverse-on-surface);
  box-shadow: 0 3px 6px rgba(0, 0, 0, 0.25);
}

.sw-snackbar__text {
  flex: 1;
  padding: 0.5rem 0;
  font-size: 0.875rem;
}

.sw-snackbar__action,
.sw-snackbar__close {
  border: none;
  background: transparent;
  color: var(--md-inverse-primary);
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  padding: 0.5rem;
}

.sw-snackbar__close {
  color: var(--md-inverse-on-surface);
}

.sw-card {
  width: 280px;
  padding: 1rem;
  border-radius: var(--radius-m);
}

.sw-card--elevated {
  background: var(--md-surface-container);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
}

.sw-card--filled {
  background: var(--md-surface-container-high);
}

.sw-card--outlined {
  border: 1px solid var(--md-outline-variant);
}

.sw-card__title {
  font-size: 1rem;
  font-weight: 500;
  margin-bottom: 0.25rem;
}

.sw-card__body {
  font-size: 0.875rem;
  color: var(--md-on-surface-variant);
}

.sw-scrim {
  position: absolute;
  inset: 0;
  background: var(--md-scrim);
}

.sw-dialog {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: min(312px, 90%);
  padding: 1.5rem;
  border-radius: 28px;
  background: var(--md-surface-container-high);
  color: var(--md-on-surface);
}

.sw-dialog__icon {
  text-align: center;
  color: var(--md-error);
  margin-bottom: 1rem;
}

.sw-dialog__headline {
  font-size: 1.5rem;
  font-weight: 400;
  margin-bottom: 1rem;
}

.sw-dialog__body {
  font-size: 0.875rem;
  color: var(--md-on-surface-variant);
}

.sw-dialog__actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.sw-tooltip {
  padding: 0.25rem 0.5rem;
  border-radius: 4px;
  background: var(--md-inverse-surface);
  color: var(--md-inverse-on-surface);
  font-size: 0.75rem;
}

.sw-tabs {
  width: 100%;
  max-width: 420px;
}

.sw-tabs__bar {
  display: flex;
  border-bottom: 1px solid var(--md-outline-variant);
}

.sw-tab {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.125rem;
  padding: 0.75rem 0.5rem;
  border: none;
  border-bottom: 3px solid transparent;
  background: transparent;
  color: var(--md-on-surface-variant);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
}

.sw-tab.is-active {
  color: var(--md-primary);
  border-bottom-color: var(--md-primary);
}

.sw-tabs--secondary .sw-tab.is-active {
  color: var(--md-on-surface);
  border-bottom-width: 2px;
}

.sw-tabs__panel {
  padding: 1rem;
  text-align: center;
  color: var(--md-on-surface-variant);
}

.sw-check-label,
.sw-radio-label,
.sw-switch-label {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  cursor: pointer;
}

.sw-check-group__children {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin: 0.5rem 0 0 2rem;
}

.sw-checkbox {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 18px;
  height: 18px;
  border: 2px solid var(--md-on-surface-variant);
  border-radius: 2px;
  background: transparent;
  cursor: pointer;
}

.sw-checkbox.is-checked,
.sw-checkbox.is-indeterminate {
  border-color: var(--md-primary);
  background: var(--md-primary);
  color: var(--md-on-primary);
}

.sw-checkbox.has-error {
  border-color: var(--md-error);
}

.sw-checkbox__mark {
  font-size: 0.75rem;
  line-height: 1;
}

.sw-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  height: 32px;
  padding: 0 1rem;
  border: 1px solid var(--md-outline);
  border-radius: var(--radius-s);
  background: transparent;
  color: var(--md-on-surface);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
}

.sw-chip.is-selected {
  border-color: transparent;
  background: var(--md-secondary-container);
  color: var(--md-on-secondary-container);
}

.sw-chip__remove {
  border: none;
  background: transparent;
  color: inherit;
  cursor: pointer;
}

.sw-menu-anchor {
  position: relative;
  display: inline-flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 0.5rem;
}

.sw-menu {
  min-width: 160px;
  padding: 0.5rem 0;
  border-radius: 4px;
  background: var(--md-surface-container);
  box-shadow: 0 3px 6px rgba(0, 0, 0, 0.25);
}

.sw-menu__item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  width: 100%;
  padding: 0.5rem 1rem;
  border: none;
  background: transparent;
  color: var(--md-on-surface);
  font: inherit;
  text-align: left;
  cursor: pointer;
}

.sw-menu__item:hover {
  background: var(--md-surface-container-high);
}

.sw-menu__item.is-danger {
  color: var(--md-error);
}

.sw-menu__divider {
  height: 1px;
  margin: 0.5rem 0;
  background: var(--md-outline-variant);
}

.sw-radio-group {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.sw-radio {
  width: 20px;
  height: 20px;
  border: 2px solid var(--md-on-surface-variant);
  border-radius: 50%;
  background: transparent;
  cursor: pointer;
}

.sw-radio.is-selected {
  border-color: var(--md-primary);
  box-shadow: inset 0 0 0 3px var(--md-surface), inset 0 0 0 10px var(--md-primary);
}

.sw-slider {
  display: flex;
  align-items: center;
  gap: 1rem;
  width: 100%;
  max-width: 320px;
}

.sw-slider__input {
  flex: 1;
  accent-color: var(--md-primary);
}

.sw-slider__value {
  min-width: 3rem;
  font-size: 0.875rem;
  text-align: right;
}

.sw-switch {
  position: relative;
  width: 52px;
  height: 32px;
  border: 2px solid var(--md-outline);
  border-radius: var(--radius-full);
  background: var(--md-surface-container-high);
  cursor: pointer;
}

.sw-switch__thumb {
  position: absolute;
  top: 50%;
  left: 6px;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 16px;
  height: 16px;
  border-radius: 50%;
  background: var(--md-outline);
  color: var(--md-surface);
  font-size: 0.75rem;
  transform: translateY(-50%);
  transition: left 0.15s;
}

.sw-switch.has-icons .sw-switch__thumb {
  width: 24px;
  height: 24px;
  left: 2px;
}

.sw-switch.is-on {
  border-color: var(--md-primary);
  background: var(--md-primary);
}

.sw-switch.is-on .sw-switch__thumb {
  left: 24px;
  width: 24px;
  height: 24px;
  background: var(--md-on-primary);
  color: var(--md-primary);
}

.sw-field {
  display: inline-flex;
  flex-direction: column;
  gap: 0.25rem;
  width: 280px;
}

.sw-field__label {
  font-size: 0.75rem;
  color: var(--md-on-surface-variant);
}

.sw-field__box {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0 0.75rem;
  height: 56px;
}

.sw-field--filled .sw-field__box {
  border-bottom: 1px solid var(--md-on-surface-variant);
  border-radius: 4px 4px 0 0;
  background: var(--md-surface-container-high);
}

.sw-field--outlined .sw-field__box {
  border: 1px solid var(--md-outline);
  border-radius: 4px;
}

.sw-field__input {
  flex: 1;
  border: none;
  outline: none;
  background: transparent;
  color: var(--md-on-surface);
  font: inherit;
}

.sw-field__clear {
  border: none;
  background: transparent;
  color: var(--md-on-surface-variant);
  cursor: pointer;
}

.sw-field__support {
  font-size: 0.75rem;
  color: var(--md-on-surface-variant);
}

.sw-field.has-error .sw-field__box {
  border-color: var(--md-error);
}

.sw-field__support--error {
  color: var(--md-error);
}
"#;

const DEFAULT_JS: &str = r#"// swatch site runtime
(function() {
  'use strict';

  const root = document.documentElement;
  const body = document.body;

  function setCookie(name, value) {
    document.cookie = name + '=' + encodeURIComponent(value) + '; path=/; max-age=31536000; samesite=lax';
  }

  // Theme toggle
  document.querySelectorAll('[data-theme-toggle]').forEach(btn => {
    btn.addEventListener('click', () => {
      const dark = root.classList.toggle('dark');
      setCookie('theme', dark ? 'dark' : 'light');
    });
  });

  // Remember an explicit language choice
  document.querySelectorAll('[data-lang]').forEach(link => {
    link.addEventListener('click', () => setCookie('lang', link.getAttribute('data-lang')));
  });

  // Mobile menu toggle
  document.querySelectorAll('[data-sidebar-toggle]').forEach(btn => {
    btn.addEventListener('click', () => body.classList.toggle('sidebar-open'));
  });

  // Code tabs
  document.querySelectorAll('[data-code-tabs]').forEach(tabs => {
    tabs.addEventListener('click', event => {
      const tab = event.target.closest('[data-tab]');
      if (!tab) return;
      const name = tab.getAttribute('data-tab');
      tabs.querySelectorAll('[data-tab]').forEach(t => {
        t.setAttribute('aria-selected', String(t === tab));
      });
      tabs.querySelectorAll('[data-panel]').forEach(panel => {
        panel.hidden = panel.getAttribute('data-panel') !== name;
      });
    });
  });

  // Copy buttons revert after two seconds
  document.querySelectorAll('[data-copy]').forEach(btn => {
    const idle = btn.textContent;
    const done = btn.getAttribute('data-copied') || idle;

    let revert = null;

    btn.addEventListener('click', async () => {
      const code = btn.parentElement.querySelector('code');
      try {
        await navigator.clipboard.writeText(code ? code.textContent : '');
        btn.textContent = done;
      } catch (err) {
        btn.textContent = 'Error';
      }
      // Another click restarts the countdown
      clearTimeout(revert);
      revert = setTimeout(() => { btn.textContent = idle; }, 2000);
    });
  });

  // Scroll to top
  const scrollTop = document.querySelector('[data-scroll-top]');
  if (scrollTop) {
    const update = () => scrollTop.classList.toggle('visible', window.scrollY > 300);
    let pending = null;
    window.addEventListener('scroll', () => {
      clearTimeout(pending);
      pending = setTimeout(update, 100);
    }, { passive: true });
    scrollTop.addEventListener('click', () => window.scrollTo({ top: 0, behavior: 'smooth' }));
    update();
  }

  // Live previews
  const livePath = body.getAttribute('data-live');
  if (!livePath) return;

  const previews = new Map();
  document.querySelectorAll('[data-instance]').forEach(el => {
    previews.set(el.getAttribute('data-instance'), el);
  });

  let socket = null;

  function send(message) {
    if (socket && socket.readyState === WebSocket.OPEN) {
      socket.send(JSON.stringify(message));
    }
  }

  function mountAll() {
    previews.forEach((el, instance) => {
      send({
        type: 'mount',
        instance,
        component: el.getAttribute('data-component'),
        variant: Number(el.getAttribute('data-variant')) || 0,
      });
    });
  }

  function render(instance, html) {
    const el = previews.get(instance);
    if (!el) return;

    const active = document.activeElement;
    let focus = null;
    if (active && el.contains(active) && active.hasAttribute('data-input')) {
      focus = {
        name: active.getAttribute('data-input'),
        start: active.selectionStart,
        end: active.selectionEnd,
      };
    }

    el.innerHTML = html;

    if (focus) {
      const input = el.querySelector('[data-input="' + focus.name + '"]');
      if (input) {
        input.focus();
        if (typeof input.setSelectionRange === 'function' && focus.start !== null) {
          try { input.setSelectionRange(focus.start, focus.end); } catch (err) { /* range inputs */ }
        }
      }
    }
  }

  previews.forEach((el, instance) => {
    el.addEventListener('click', event => {
      const target = event.target.closest('[data-action]');
      if (!target || !el.contains(target)) return;
      const message = { type: 'action', instance, action: target.getAttribute('data-action') };
      if (target.hasAttribute('data-value')) {
        message.value = target.getAttribute('data-value');
      }
      send(message);
    });

    el.addEventListener('input', event => {
      const target = event.target.closest('[data-input]');
      if (!target) return;
      send({ type: 'input', instance, name: target.getAttribute('data-input'), value: target.value });
    });
  });

  function connect() {
    const scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
    socket = new WebSocket(scheme + location.host + livePath);

    socket.addEventListener('open', mountAll);
    socket.addEventListener('message', event => {
      let message;
      try {
        message = JSON.parse(event.data);
      } catch (err) {
        return;
      }
      if (message.type === 'render') {
        render(message.instance, message.html);
      } else if (message.type === 'reload') {
        location.reload();
      }
    });
    socket.addEventListener('close', () => setTimeout(connect, 1000));
  }

  connect();
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains("html.dark"));
        assert!(css.contains(".sw-snackbar"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("clipboard"));
        assert!(js.contains("2000"));
        assert!(js.contains("'mount'"));
        assert!(js.contains("data-theme-toggle"));
    }

    #[test]
    fn script_timers_restart_instead_of_stacking() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("clearTimeout(revert);\n      revert = setTimeout("));
        assert!(js.contains("clearTimeout(pending);\n      pending = setTimeout(update, 100);"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn site_stylesheet_minifies() {
        let minified = AssetPipeline::minify_css(&AssetPipeline::generate_css()).unwrap();
        assert!(minified.len() < AssetPipeline::generate_css().len());
        assert!(minified.contains(".sw-switch"));
    }
}
