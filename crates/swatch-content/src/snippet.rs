//! Code snippet tables.

use std::fmt;

use serde::Deserialize;

use crate::model::LocalizedText;

/// Target framework of a code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Flutter,
}

impl Framework {
    /// Frameworks in tab order.
    pub const ALL: [Framework; 2] = [Framework::React, Framework::Flutter];

    /// Stable identifier used in markup.
    pub fn key(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Flutter => "flutter",
        }
    }

    /// Label shown on the snippet tab.
    pub fn label(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Flutter => "Flutter",
        }
    }

    /// Language hint for syntax highlighting.
    pub fn source_language(self) -> &'static str {
        match self {
            Self::React => "tsx",
            Self::Flutter => "dart",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One documented example of a component, with code for both frameworks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnippetVariant {
    /// Variant title (e.g. "Filled Button")
    pub title: LocalizedText,

    /// React source
    pub react: String,

    /// Flutter source
    pub flutter: String,
}

impl SnippetVariant {
    /// Source for the given framework.
    pub fn code(&self, framework: Framework) -> &str {
        match framework {
            Framework::React => &self.react,
            Framework::Flutter => &self.flutter,
        }
    }
}

/// Ordered snippets for one component.
///
/// The order is significant: variant `i` here is rendered next to preview
/// variant `i` and numbered `i + 1`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CodeSnippetEntry {
    #[serde(default)]
    pub snippets: Vec<SnippetVariant>,
}

impl CodeSnippetEntry {
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SnippetVariant> {
        self.snippets.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    #[test]
    fn parses_snippet_entry() {
        let yaml = r#"
snippets:
  - title: { en: Filled Button, ko: Filled 버튼 }
    react: <Button variant="filled">Filled</Button>
    flutter: FilledButton(onPressed: () {}, child: Text('Filled'))
"#;

        let entry: CodeSnippetEntry = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(entry.len(), 1);
        let variant = entry.get(0).unwrap();
        assert_eq!(variant.title.get(Language::Ko), "Filled 버튼");
        assert!(variant.code(Framework::React).contains("variant=\"filled\""));
        assert!(variant.code(Framework::Flutter).starts_with("FilledButton"));
    }
}
