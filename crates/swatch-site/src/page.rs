//! Component page assembly.
//!
//! Turns a component id and a language into an ordered page model: overview,
//! examples, then one section per documentation field that has content. The
//! table of contents mirrors the sections exactly. Assembly never fails; an
//! unknown id produces a complete generic page.

use serde::Serialize;

use swatch_content::{
    Catalog, DocField, DocumentationRecord, Framework, Language, LocalizedText, NamedItem,
    NavEntry,
};
use swatch_preview::PreviewRegistry;

use crate::markdown::{plain_text, render_inline, render_markdown};

/// Identity of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Overview,
    Examples,
    Field(DocField),
}

impl SectionId {
    /// Anchor id, also the suffix of the `sections.*` translation key.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Examples => "examples",
            Self::Field(field) => field.key(),
        }
    }
}

/// One entry of the "On this page" list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub id: &'static str,
    pub title: String,
}

/// A named item with optional description, both rendered to HTML.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRowView {
    pub property: String,
    pub value: String,
}

/// Styling hint for bullet lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTone {
    Plain,
    Do,
    Dont,
}

/// Code for one framework tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetView {
    pub framework: &'static str,
    pub label: &'static str,
    pub language: &'static str,
    pub code: String,
}

/// One numbered example with its live preview and code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleCard {
    /// 1-based example number
    pub number: usize,
    /// Localized "Example {number}"
    pub label: String,
    pub title: String,
    /// Page-unique id of the preview instance
    pub instance: String,
    pub component: String,
    pub variant: usize,
    /// Initial state of the preview
    pub preview_html: String,
    /// React first, then Flutter
    pub snippets: Vec<SnippetView>,
}

/// Content of a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Markdown {
        html: String,
    },
    Gallery {
        cards: Vec<ExampleCard>,
    },
    /// A registered preview without snippets
    SinglePreview {
        instance: String,
        component: String,
        preview_html: String,
    },
    Message {
        text: String,
    },
    Items {
        items: Vec<ItemView>,
    },
    Specs {
        property_label: String,
        value_label: String,
        rows: Vec<SpecRowView>,
    },
    List {
        tone: ListTone,
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(skip)]
    pub kind: SectionId,
    pub id: &'static str,
    pub title: String,
    pub body: SectionBody,
}

/// Link to a neighbouring component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLink {
    pub id: String,
    pub title: String,
}

/// The assembled component page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentPage {
    pub id: String,
    /// Whether the id is in the navigation
    pub known: bool,
    pub title: String,
    /// Category label above the title
    pub eyebrow: String,
    /// Plain-text summary for meta tags and the search index
    pub summary: String,
    pub sections: Vec<Section>,
    pub toc: Vec<TocEntry>,
    pub previous: Option<PageLink>,
    pub next: Option<PageLink>,
}

impl ComponentPage {
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// Number of live previews on the page.
    pub fn example_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| match &s.body {
                SectionBody::Gallery { cards } => cards.len(),
                SectionBody::SinglePreview { .. } => 1,
                _ => 0,
            })
            .sum()
    }
}

/// Builds [`ComponentPage`]s from the catalog and the preview registry.
#[derive(Clone, Copy)]
pub struct PageAssembler<'a> {
    catalog: &'a Catalog,
    previews: &'a PreviewRegistry,
}

impl<'a> PageAssembler<'a> {
    pub fn new(catalog: &'a Catalog, previews: &'a PreviewRegistry) -> Self {
        Self { catalog, previews }
    }

    /// Assemble the page for `id` in `language`.
    pub fn assemble(&self, id: &str, language: Language) -> ComponentPage {
        let t = self.catalog.localizer(language);
        let known = self.catalog.entry(id).is_some();

        let title = if known {
            self.catalog.component_name(language, id)
        } else {
            tracing::debug!("Unknown component '{}', rendering generic page", id);
            t.t("page.genericTitle")
        };
        let eyebrow = match self.catalog.category_of(id) {
            Some(category) => self.catalog.category_name(language, &category.key),
            None => t.t("page.eyebrow"),
        };

        let record = self.catalog.documentation(id);
        let overview = record.and_then(DocumentationRecord::overview);
        let summary = match overview {
            Some(text) => plain_text(text.get(language)),
            None => t.t_with("page.placeholder", &[("name", title.as_str())]),
        };

        let mut sections = vec![
            self.overview_section(overview, &summary, language),
            self.examples_section(id, language),
        ];
        if let Some(record) = record {
            for field in record.present_fields() {
                sections.push(self.field_section(record, field, language));
            }
        }

        let toc = sections
            .iter()
            .map(|s| TocEntry {
                id: s.id,
                title: s.title.clone(),
            })
            .collect();

        let (previous, next) = self.neighbors(id);
        let link = |entry: &NavEntry| PageLink {
            id: entry.id.to_string(),
            title: self.catalog.component_name(language, entry.id.as_str()),
        };

        ComponentPage {
            id: id.to_string(),
            known,
            title,
            eyebrow,
            summary,
            sections,
            toc,
            previous: previous.map(link),
            next: next.map(link),
        }
    }

    /// Previous and next entries in flattened navigation order.
    ///
    /// Both are `None` for ids not in the navigation.
    pub fn neighbors(&self, id: &str) -> (Option<&'a NavEntry>, Option<&'a NavEntry>) {
        let entries: Vec<&NavEntry> = self.catalog.entries().map(|(_, entry)| entry).collect();
        match entries.iter().position(|entry| entry.id.as_str() == id) {
            Some(index) => (
                index.checked_sub(1).map(|i| entries[i]),
                entries.get(index + 1).copied(),
            ),
            None => (None, None),
        }
    }

    fn section(&self, kind: SectionId, language: Language, body: SectionBody) -> Section {
        let title = self
            .catalog
            .localizer(language)
            .t(&format!("sections.{}", kind.anchor()));
        Section {
            kind,
            id: kind.anchor(),
            title,
            body,
        }
    }

    fn overview_section(
        &self,
        overview: Option<&LocalizedText>,
        placeholder: &str,
        language: Language,
    ) -> Section {
        let html = match overview {
            Some(text) => render_markdown(text.get(language)),
            None => render_markdown(placeholder),
        };
        self.section(SectionId::Overview, language, SectionBody::Markdown { html })
    }

    fn examples_section(&self, id: &str, language: Language) -> Section {
        let t = self.catalog.localizer(language);
        let body = if let Some(entry) = self.catalog.snippets(id) {
            let cards = entry
                .snippets
                .iter()
                .enumerate()
                .map(|(variant, snippet)| ExampleCard {
                    number: variant + 1,
                    label: t.t_with("page.example", &[("number", (variant + 1).to_string().as_str())]),
                    title: snippet.title.get(language).to_string(),
                    instance: instance_id(id, variant),
                    component: id.to_string(),
                    variant,
                    preview_html: self.previews.render_initial(id, variant),
                    snippets: Framework::ALL
                        .iter()
                        .map(|framework| SnippetView {
                            framework: framework.key(),
                            label: framework.label(),
                            language: framework.source_language(),
                            code: snippet.code(*framework).to_string(),
                        })
                        .collect(),
                })
                .collect();
            SectionBody::Gallery { cards }
        } else if self.previews.contains(id) {
            SectionBody::SinglePreview {
                instance: instance_id(id, 0),
                component: id.to_string(),
                preview_html: self.previews.render_initial(id, 0),
            }
        } else {
            SectionBody::Message {
                text: t.t("page.noExample"),
            }
        };
        self.section(SectionId::Examples, language, body)
    }

    fn field_section(
        &self,
        record: &DocumentationRecord,
        field: DocField,
        language: Language,
    ) -> Section {
        let items = |list: &Option<Vec<NamedItem>>| SectionBody::Items {
            items: list
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter(|item| !item.is_empty())
                .map(|item| ItemView {
                    name: render_inline(item.name.get(language)),
                    description: item
                        .description
                        .as_ref()
                        .filter(|d| !d.is_empty())
                        .map(|d| render_inline(d.get(language))),
                })
                .collect(),
        };
        let list = |tone: ListTone, list: &Option<Vec<LocalizedText>>| SectionBody::List {
            tone,
            items: list
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter(|text| !text.is_empty())
                .map(|text| render_inline(text.get(language)))
                .collect(),
        };

        let body = match field {
            DocField::Types => items(&record.types),
            DocField::States => items(&record.states),
            DocField::Anatomy => items(&record.anatomy),
            DocField::Comparisons => items(&record.comparisons),
            DocField::Configurations => items(&record.configurations),
            DocField::ErrorStates => items(&record.error_states),
            DocField::Specs => {
                let t = self.catalog.localizer(language);
                SectionBody::Specs {
                    property_label: t.t("page.property"),
                    value_label: t.t("page.value"),
                    rows: record
                        .specs
                        .as_deref()
                        .unwrap_or_default()
                        .iter()
                        .filter(|row| !row.is_empty())
                        .map(|row| SpecRowView {
                            property: render_inline(row.property.get(language)),
                            value: render_inline(row.value.get(language)),
                        })
                        .collect(),
                }
            }
            DocField::Guidelines => list(ListTone::Plain, &record.guidelines),
            DocField::BestPractices => list(ListTone::Plain, &record.best_practices),
            DocField::Accessibility => list(ListTone::Plain, &record.accessibility),
            DocField::Dos => list(ListTone::Do, &record.dos),
            DocField::Donts => list(ListTone::Dont, &record.donts),
            DocField::Note => SectionBody::Markdown {
                html: record
                    .note
                    .as_ref()
                    .map(|note| render_markdown(note.get(language)))
                    .unwrap_or_default(),
            },
        };

        self.section(SectionId::Field(field), language, body)
    }
}

/// Page-unique preview instance id.
fn instance_id(component: &str, variant: usize) -> String {
    format!("{component}--{variant}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixtures() -> (Catalog, PreviewRegistry) {
        (Catalog::bundled().unwrap(), PreviewRegistry::builtin())
    }

    #[test]
    fn unknown_component_gets_generic_page() {
        let (catalog, previews) = fixtures();
        let page =
            PageAssembler::new(&catalog, &previews).assemble("nonexistent-widget", Language::En);

        assert!(!page.known);
        assert_eq!(page.title, "Component");
        assert_eq!(
            page.section_ids(),
            vec![SectionId::Overview, SectionId::Examples]
        );
        assert_eq!(
            page.sections[1].body,
            SectionBody::Message {
                text: "No example available for this component.".to_string()
            }
        );
        assert_eq!(page.previous, None);
        assert_eq!(page.next, None);
        assert!(page.summary.contains("Component"));
    }

    #[test]
    fn first_entry_has_only_next() {
        let (catalog, previews) = fixtures();
        let page = PageAssembler::new(&catalog, &previews).assemble("button", Language::En);

        assert_eq!(page.previous, None);
        assert_eq!(
            page.next,
            Some(PageLink {
                id: "fab".to_string(),
                title: catalog.component_name(Language::En, "fab"),
            })
        );
    }

    #[test]
    fn last_entry_has_only_previous() {
        let (catalog, previews) = fixtures();
        let assembler = PageAssembler::new(&catalog, &previews);
        let last = catalog.entries().last().map(|(_, e)| e.id.to_string()).unwrap();

        let (previous, next) = assembler.neighbors(&last);
        assert!(previous.is_some());
        assert!(next.is_none());
    }

    #[test]
    fn neighbors_cross_category_boundaries() {
        let (catalog, previews) = fixtures();
        let assembler = PageAssembler::new(&catalog, &previews);

        let (previous, next) = assembler.neighbors("badge");
        assert_eq!(previous.map(|e| e.id.as_str()), Some("segmented-buttons"));
        assert_eq!(next.map(|e| e.id.as_str()), Some("progress-indicators"));
    }

    #[test]
    fn sections_match_present_fields() {
        let (catalog, previews) = fixtures();
        let assembler = PageAssembler::new(&catalog, &previews);

        for (_, entry) in catalog.entries() {
            let id = entry.id.as_str();
            let Some(record) = catalog.documentation(id) else {
                continue;
            };
            for language in Language::ALL {
                let page = assembler.assemble(id, language);

                let mut expected = vec![SectionId::Overview, SectionId::Examples];
                expected.extend(record.present_fields().into_iter().map(SectionId::Field));
                assert_eq!(page.section_ids(), expected, "{id} in {language}");

                let toc: Vec<&str> = page.toc.iter().map(|t| t.id).collect();
                let anchors: Vec<&str> = page.sections.iter().map(|s| s.id).collect();
                assert_eq!(toc, anchors);
            }
        }
    }

    #[test]
    fn components_without_docs_use_placeholder_overview() {
        let (catalog, previews) = fixtures();
        let page = PageAssembler::new(&catalog, &previews).assemble("tooltip", Language::En);

        assert_eq!(
            page.section_ids(),
            vec![SectionId::Overview, SectionId::Examples]
        );
        let name = catalog.component_name(Language::En, "tooltip");
        assert!(page
            .summary
            .starts_with(&format!("This is a placeholder page for the {name} component.")));
        // Unregistered previews fall back to numbered placeholders.
        let SectionBody::Gallery { cards } = &page.sections[1].body else {
            panic!("expected gallery");
        };
        assert!(cards[1].preview_html.contains("Preview #2"));
    }

    #[test]
    fn example_cards_are_numbered_with_unique_instances() {
        let (catalog, previews) = fixtures();
        let page = PageAssembler::new(&catalog, &previews).assemble("button", Language::Ko);

        let SectionBody::Gallery { cards } = &page.sections[1].body else {
            panic!("expected gallery");
        };
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[2].label, "예제 3");
        assert_eq!(cards[1].title, "Filled 버튼");
        assert_eq!(cards[0].snippets[0].framework, "react");
        assert_eq!(cards[0].snippets[1].framework, "flutter");

        let mut instances: Vec<&str> = cards.iter().map(|c| c.instance.as_str()).collect();
        instances.dedup();
        assert_eq!(instances.len(), 7);
        assert_eq!(page.example_count(), 7);
    }

    #[test]
    fn registered_preview_without_snippets_shows_first_variant() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("snippets.yaml"), "{}").unwrap();
        let catalog = Catalog::from_dir(temp.path()).unwrap();
        let previews = PreviewRegistry::builtin();

        let page = PageAssembler::new(&catalog, &previews).assemble("switch", Language::En);

        assert!(matches!(
            page.sections[1].body,
            SectionBody::SinglePreview { .. }
        ));
        assert_eq!(page.example_count(), 1);
    }

    #[test]
    fn dos_and_donts_carry_tone() {
        let (catalog, previews) = fixtures();
        let page = PageAssembler::new(&catalog, &previews).assemble("button", Language::En);

        let donts = page
            .sections
            .iter()
            .find(|s| s.kind == SectionId::Field(DocField::Donts))
            .unwrap();
        assert!(matches!(
            donts.body,
            SectionBody::List {
                tone: ListTone::Dont,
                ..
            }
        ));
        assert_eq!(donts.title, "Don't");
    }

    #[test]
    fn blank_content_renders_no_empty_sections() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("docs")).unwrap();
        std::fs::write(
            temp.path().join("docs/switch.yaml"),
            "overview: { en: '', ko: 개요 }\ndos: ['  ']\nnote: { en: '', ko: 참고 }\n",
        )
        .unwrap();
        let catalog = Catalog::from_dir(temp.path()).unwrap();
        let previews = PreviewRegistry::builtin();

        let page = PageAssembler::new(&catalog, &previews).assemble("switch", Language::En);

        assert_eq!(
            page.section_ids(),
            vec![
                SectionId::Overview,
                SectionId::Examples,
                SectionId::Field(DocField::Note)
            ]
        );
        assert_eq!(page.summary, "개요");
        assert_eq!(
            page.sections[0].body,
            SectionBody::Markdown {
                html: "<p>개요</p>\n".to_string()
            }
        );
        let SectionBody::Markdown { html } = &page.sections[2].body else {
            panic!("expected markdown note");
        };
        assert!(html.contains("참고"));
    }
}
