//! Text fields.

use crate::markup::{classes, escape, flag, icon};
use crate::traits::{Effects, Preview, PreviewEvent};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Filled,
    Outlined,
    Helper,
    Error,
    Search,
}

#[derive(Debug)]
struct TextFieldPreview {
    kind: FieldKind,
    value: String,
}

impl TextFieldPreview {
    fn label(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Filled | FieldKind::Outlined => Some("Label"),
            FieldKind::Helper => Some("Email"),
            FieldKind::Error => Some("Password"),
            FieldKind::Search => None,
        }
    }

    fn placeholder(&self) -> &'static str {
        match self.kind {
            FieldKind::Helper => "Enter email",
            FieldKind::Error => "Enter password",
            FieldKind::Search => "Search...",
            FieldKind::Filled | FieldKind::Outlined => "Enter text",
        }
    }

    /// The password field is invalid once something shorter than the minimum is typed.
    fn has_error(&self) -> bool {
        self.kind == FieldKind::Error
            && !self.value.is_empty()
            && self.value.chars().count() < MIN_PASSWORD_LEN
    }
}

impl Preview for TextFieldPreview {
    fn render(&self) -> String {
        let style = if self.kind == FieldKind::Filled {
            "filled"
        } else {
            "outlined"
        };
        let error = self.has_error();
        let input_type = if self.kind == FieldKind::Error {
            "password"
        } else {
            "text"
        };

        let label = self
            .label()
            .map(|l| format!(r#"<span class="sw-field__label">{l}</span>"#))
            .unwrap_or_default();
        let leading = if self.kind == FieldKind::Search {
            icon("search")
        } else {
            String::new()
        };
        let trailing = if self.kind == FieldKind::Search && !self.value.is_empty() {
            format!(
                r#"<button type="button" class="sw-field__clear" data-action="clear" aria-label="Clear">{}</button>"#,
                icon("close")
            )
        } else {
            String::new()
        };
        let supporting = match self.kind {
            FieldKind::Helper => r#"<span class="sw-field__support">We'll never share your email</span>"#,
            FieldKind::Error if error => r#"<span class="sw-field__support sw-field__support--error">Password must be at least 8 characters</span>"#,
            _ => "",
        };

        format!(
            r#"<div class="sw-preview-row"><label class="{}">{label}<span class="sw-field__box">{leading}<input class="sw-field__input" type="{input_type}" data-input="value" value="{}" placeholder="{}"{}>{trailing}</span>{supporting}</label></div>"#,
            classes(
                &format!("sw-field sw-field--{style}"),
                &[("has-error", error), ("has-value", !self.value.is_empty())]
            ),
            escape(&self.value),
            escape(self.placeholder()),
            flag(r#"aria-invalid="true""#, error),
        )
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        match event {
            PreviewEvent::Input { name, value } if name == "value" => {
                self.value = value.clone();
            }
            PreviewEvent::Action { name, .. } if name == "clear" => self.value.clear(),
            _ => {}
        }
    }
}

pub(crate) fn text_field(variant: usize) -> Box<dyn Preview> {
    let kind = match variant {
        1 => FieldKind::Outlined,
        2 => FieldKind::Helper,
        3 => FieldKind::Error,
        4 => FieldKind::Search,
        _ => FieldKind::Filled,
    };
    Box::new(TextFieldPreview {
        kind,
        value: String::new(),
    })
}
