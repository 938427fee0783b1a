//! Preview registry.
//!
//! Maps a component id to a factory that builds a fresh preview for one
//! variant index. Ids without a factory get a numbered placeholder.

use std::collections::BTreeMap;

use swatch_content::{ComponentId, InvalidComponentId};

use crate::components;
use crate::markup::escape;
use crate::traits::{Effects, Preview, PreviewEvent};

/// Builds a preview for an in-range variant index.
pub type PreviewFactory = fn(usize) -> Box<dyn Preview>;

#[derive(Clone, Copy)]
struct RegisteredPreview {
    variants: usize,
    factory: PreviewFactory,
}

/// A registry of preview factories, keyed by component id.
#[derive(Clone, Default)]
pub struct PreviewRegistry {
    previews: BTreeMap<ComponentId, RegisteredPreview>,
}

impl std::fmt::Debug for PreviewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.previews.iter().map(|(id, p)| (id.as_str(), p.variants)))
            .finish()
    }
}

impl PreviewRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in preview.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, variants, factory) in components::BUILTIN {
            // Built-in ids are valid and unique; covered by tests.
            if let Err(e) = registry.register(id, *variants, *factory) {
                tracing::error!("Skipping built-in preview {}: {}", id, e);
            }
        }
        registry
    }

    /// Register a factory supporting `variants` variants.
    pub fn register(
        &mut self,
        id: &str,
        variants: usize,
        factory: PreviewFactory,
    ) -> Result<(), RegistryError> {
        let id = ComponentId::new(id)?;
        if variants == 0 {
            return Err(RegistryError::NoVariants(id));
        }
        if self.previews.contains_key(&id) {
            return Err(RegistryError::Duplicate(id));
        }
        self.previews
            .insert(id, RegisteredPreview { variants, factory });
        Ok(())
    }

    /// Check if a component has a registered preview.
    pub fn contains(&self, id: &str) -> bool {
        self.previews.contains_key(id)
    }

    /// Number of variants a registered preview supports.
    pub fn variant_count(&self, id: &str) -> Option<usize> {
        self.previews.get(id).map(|p| p.variants)
    }

    /// Registered component ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.previews.keys()
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Create a freshly initialized preview.
    ///
    /// An out-of-range variant falls back to variant 0. An unregistered id
    /// yields a placeholder labelled `Preview #N` with `N = variant + 1`.
    pub fn create(&self, id: &str, variant: usize) -> Box<dyn Preview> {
        match self.previews.get(id) {
            Some(preview) => {
                let index = if variant < preview.variants {
                    variant
                } else {
                    tracing::debug!(
                        "Variant {} out of range for {} ({} variants), using 0",
                        variant,
                        id,
                        preview.variants
                    );
                    0
                };
                (preview.factory)(index)
            }
            None => Box::new(Placeholder::new(variant)),
        }
    }

    /// Initial HTML of a preview, without keeping the instance.
    pub fn render_initial(&self, id: &str, variant: usize) -> String {
        self.create(id, variant).render()
    }
}

/// Stand-in for components without a dedicated preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    number: usize,
}

impl Placeholder {
    pub fn new(variant: usize) -> Self {
        Self {
            number: variant.saturating_add(1),
        }
    }

    pub fn label(&self) -> String {
        format!("Preview #{}", self.number)
    }
}

impl Preview for Placeholder {
    fn render(&self) -> String {
        format!(
            r#"<div class="sw-preview-placeholder">{}</div>"#,
            escape(&self.label())
        )
    }

    fn handle(&mut self, _event: &PreviewEvent, _effects: &mut Effects) {}
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    InvalidId(#[from] InvalidComponentId),

    #[error("Preview already registered: {0}")]
    Duplicate(ComponentId),

    #[error("Preview {0} must support at least one variant")]
    NoVariants(ComponentId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_content::Catalog;

    const UNREGISTERED: [&str; 7] = [
        "sheets-bottom",
        "tooltip",
        "bottom-app-bar",
        "navigation-bar",
        "navigation-drawer",
        "top-app-bar",
        "date-pickers",
    ];

    #[test]
    fn registers_builtin_previews() {
        let registry = PreviewRegistry::builtin();

        assert_eq!(registry.len(), 17);
        assert_eq!(registry.variant_count("button"), Some(7));
        assert_eq!(registry.variant_count("snackbar"), Some(3));
        for id in UNREGISTERED {
            assert!(!registry.contains(id), "{id} should use the placeholder");
        }
    }

    #[test]
    fn variant_counts_match_snippets() {
        let registry = PreviewRegistry::builtin();
        let catalog = Catalog::bundled().unwrap();

        for id in registry.ids() {
            let snippets = catalog.snippets(id.as_str()).map(|s| s.len());
            assert_eq!(
                registry.variant_count(id.as_str()),
                snippets,
                "variant count mismatch for {id}"
            );
        }
    }

    #[test]
    fn every_navigation_entry_renders() {
        let registry = PreviewRegistry::builtin();
        let catalog = Catalog::bundled().unwrap();

        for (_, entry) in catalog.entries() {
            let count = catalog.snippets(entry.id.as_str()).map_or(1, |s| s.len());
            for variant in 0..count {
                let html = registry.render_initial(entry.id.as_str(), variant);
                assert!(!html.is_empty(), "{} #{variant} is empty", entry.id);
            }
        }
    }

    #[test]
    fn out_of_range_variant_uses_first() {
        let registry = PreviewRegistry::builtin();

        assert_eq!(
            registry.render_initial("button", 99),
            registry.render_initial("button", 0)
        );
    }

    #[test]
    fn unregistered_component_gets_placeholder() {
        let registry = PreviewRegistry::builtin();

        let html = registry.render_initial("tooltip", 1);
        assert_eq!(html, r#"<div class="sw-preview-placeholder">Preview #2</div>"#);
        assert!(registry
            .render_initial("nonexistent-widget", 0)
            .contains("Preview #1"));
    }

    #[test]
    fn rejects_duplicates_and_bad_ids() {
        fn empty(_: usize) -> Box<dyn Preview> {
            Box::new(Placeholder::new(0))
        }

        let mut registry = PreviewRegistry::new();
        registry.register("widget", 1, empty).unwrap();

        assert!(matches!(
            registry.register("widget", 1, empty),
            Err(RegistryError::Duplicate(_))
        ));
        assert!(matches!(
            registry.register("Widget!", 1, empty),
            Err(RegistryError::InvalidId(_))
        ));
        assert!(matches!(
            registry.register("gadget", 0, empty),
            Err(RegistryError::NoVariants(_))
        ));
    }
}
