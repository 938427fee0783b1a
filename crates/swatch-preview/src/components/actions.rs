//! Buttons, FABs, icon buttons and segmented buttons.

use crate::markup::{classes, escape, icon};
use crate::traits::{Effects, Preview, PreviewEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonStyle {
    Elevated,
    Filled,
    Tonal,
    Outlined,
    Text,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            Self::Elevated => "sw-btn sw-btn--elevated",
            Self::Filled => "sw-btn sw-btn--filled",
            Self::Tonal => "sw-btn sw-btn--tonal",
            Self::Outlined => "sw-btn sw-btn--outlined",
            Self::Text => "sw-btn sw-btn--text",
        }
    }
}

/// A common button with a click counter.
#[derive(Debug)]
struct ButtonPreview {
    style: ButtonStyle,
    label: &'static str,
    leading_icon: Option<&'static str>,
    disabled: bool,
    clicks: u32,
}

impl Preview for ButtonPreview {
    fn render(&self) -> String {
        let icon = self.leading_icon.map(icon).unwrap_or_default();
        let (action, disabled) = if self.disabled {
            ("", " disabled")
        } else {
            (r#" data-action="click""#, "")
        };
        let counter = match self.clicks {
            0 => String::new(),
            1 => r#"<span class="sw-caption">Clicked once</span>"#.to_string(),
            n => format!(r#"<span class="sw-caption">Clicked {n} times</span>"#),
        };
        format!(
            r#"<div class="sw-preview-row"><button type="button" class="{}"{action}{disabled}>{icon}{}</button>{counter}</div>"#,
            self.style.class(),
            self.label,
        )
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        if let PreviewEvent::Action { name, .. } = event {
            if name == "click" && !self.disabled {
                self.clicks += 1;
            }
        }
    }
}

pub(crate) fn button(variant: usize) -> Box<dyn Preview> {
    let (style, label, leading_icon, disabled) = match variant {
        1 => (ButtonStyle::Filled, "Filled", None, false),
        2 => (ButtonStyle::Tonal, "Tonal", None, false),
        3 => (ButtonStyle::Outlined, "Outlined", None, false),
        4 => (ButtonStyle::Text, "Text", None, false),
        5 => (ButtonStyle::Filled, "Send", Some("send"), false),
        6 => (ButtonStyle::Filled, "Disabled", None, true),
        _ => (ButtonStyle::Elevated, "Elevated", None, false),
    };
    Box::new(ButtonPreview {
        style,
        label,
        leading_icon,
        disabled,
        clicks: 0,
    })
}

/// Floating action buttons are static.
#[derive(Debug)]
struct FabPreview {
    size: &'static str,
    icon: &'static str,
    label: Option<&'static str>,
}

impl Preview for FabPreview {
    fn render(&self) -> String {
        let label = self
            .label
            .map(|l| format!(r#"<span class="sw-fab__label">{l}</span>"#))
            .unwrap_or_default();
        let aria = self.label.unwrap_or(self.icon);
        format!(
            r#"<div class="sw-preview-row"><button type="button" class="sw-fab sw-fab--{}" aria-label="{}">{}{label}</button></div>"#,
            self.size,
            escape(aria),
            icon(self.icon),
        )
    }

    fn handle(&mut self, _event: &PreviewEvent, _effects: &mut Effects) {}
}

pub(crate) fn fab(variant: usize) -> Box<dyn Preview> {
    let (size, icon, label) = match variant {
        1 => ("small", "edit", None),
        2 => ("large", "add", None),
        3 => ("extended", "navigation", Some("Navigate")),
        _ => ("standard", "add", None),
    };
    Box::new(FabPreview { size, icon, label })
}

/// Icon buttons. The toggle variant flips between two icons.
#[derive(Debug)]
struct IconButtonPreview {
    style: &'static str,
    icon: &'static str,
    toggle: bool,
    selected: bool,
}

impl Preview for IconButtonPreview {
    fn render(&self) -> String {
        if self.toggle {
            let (glyph, label) = if self.selected {
                ("favorite", "Remove from favorites")
            } else {
                ("favorite_border", "Add to favorites")
            };
            return format!(
                r#"<div class="sw-preview-row"><button type="button" class="{}" data-action="toggle" aria-pressed="{}" aria-label="{label}">{}</button></div>"#,
                classes("sw-icon-btn sw-icon-btn--standard", &[("is-selected", self.selected)]),
                self.selected,
                icon(glyph),
            );
        }
        format!(
            r#"<div class="sw-preview-row"><button type="button" class="sw-icon-btn sw-icon-btn--{}" aria-label="{}">{}</button></div>"#,
            self.style,
            self.icon,
            icon(self.icon),
        )
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        if let PreviewEvent::Action { name, .. } = event {
            if self.toggle && name == "toggle" {
                self.selected = !self.selected;
            }
        }
    }
}

pub(crate) fn icon_button(variant: usize) -> Box<dyn Preview> {
    let (style, icon, toggle) = match variant {
        1 => ("filled", "favorite", false),
        2 => ("tonal", "bookmark", false),
        3 => ("outlined", "share", false),
        4 => ("standard", "favorite_border", true),
        _ => ("standard", "settings", false),
    };
    Box::new(IconButtonPreview {
        style,
        icon,
        toggle,
        selected: false,
    })
}

const PERIODS: [(&str, &str); 4] = [
    ("day", "Day"),
    ("week", "Week"),
    ("month", "Month"),
    ("year", "Year"),
];

const FORMATS: [(&str, &str); 3] = [
    ("bold", "format_bold"),
    ("italic", "format_italic"),
    ("underline", "format_underline"),
];

/// Segmented buttons in single or multi select mode.
#[derive(Debug)]
enum SegmentedPreview {
    Single { selected: &'static str },
    Multi { selected: [bool; 3] },
}

fn segment(selected: bool, action: &str, value: &str, content: &str) -> String {
    let check = if selected {
        r#"<span class="sw-segment__check">✓</span>"#
    } else {
        ""
    };
    format!(
        r#"<button type="button" class="{}" data-action="{action}" data-value="{value}" aria-pressed="{selected}">{check}{content}</button>"#,
        classes("sw-segment", &[("is-selected", selected)]),
    )
}

impl Preview for SegmentedPreview {
    fn render(&self) -> String {
        let segments: String = match self {
            Self::Single { selected } => PERIODS
                .iter()
                .map(|(value, label)| segment(value == selected, "select", value, label))
                .collect(),
            Self::Multi { selected } => FORMATS
                .iter()
                .zip(selected)
                .map(|((value, glyph), on)| segment(*on, "toggle", value, &icon(glyph)))
                .collect(),
        };
        format!(r#"<div class="sw-segmented" role="group">{segments}</div>"#)
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        let PreviewEvent::Action {
            name,
            value: Some(value),
        } = event
        else {
            return;
        };

        match self {
            Self::Single { selected } if name == "select" => {
                if let Some((key, _)) = PERIODS.iter().find(|(key, _)| key == value) {
                    *selected = *key;
                }
            }
            Self::Multi { selected } if name == "toggle" => {
                if let Some(index) = FORMATS.iter().position(|(key, _)| key == value) {
                    selected[index] = !selected[index];
                }
            }
            _ => {}
        }
    }
}

pub(crate) fn segmented_buttons(variant: usize) -> Box<dyn Preview> {
    match variant {
        1 => Box::new(SegmentedPreview::Multi {
            selected: [true, false, false],
        }),
        _ => Box::new(SegmentedPreview::Single { selected: "day" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(preview: &mut dyn Preview, name: &str) {
        preview.handle(&PreviewEvent::action(name), &mut Effects::new());
    }

    #[test]
    fn button_counts_clicks() {
        let mut preview = button(1);
        assert!(!preview.render().contains("Clicked"));

        click(preview.as_mut(), "click");
        click(preview.as_mut(), "click");

        assert!(preview.render().contains("Clicked 2 times"));
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let mut preview = button(6);
        click(preview.as_mut(), "click");

        let html = preview.render();
        assert!(html.contains(" disabled"));
        assert!(!html.contains("Clicked"));
    }

    #[test]
    fn toggle_icon_button_flips() {
        let mut preview = icon_button(4);
        assert!(preview.render().contains("favorite_border"));

        click(preview.as_mut(), "toggle");
        let html = preview.render();
        assert!(html.contains(">favorite<"));
        assert!(html.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn single_select_keeps_one_segment() {
        let mut preview = segmented_buttons(0);
        preview.handle(
            &PreviewEvent::action_with("select", "month"),
            &mut Effects::new(),
        );
        preview.handle(
            &PreviewEvent::action_with("select", "decade"),
            &mut Effects::new(),
        );

        let html = preview.render();
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
        assert!(html.contains(r#"data-value="month" aria-pressed="true""#));
    }

    #[test]
    fn multi_select_toggles_independently() {
        let mut preview = segmented_buttons(1);
        preview.handle(
            &PreviewEvent::action_with("toggle", "italic"),
            &mut Effects::new(),
        );
        preview.handle(
            &PreviewEvent::action_with("toggle", "bold"),
            &mut Effects::new(),
        );

        let html = preview.render();
        assert!(html.contains(r#"data-value="italic" aria-pressed="true""#));
        assert!(html.contains(r#"data-value="bold" aria-pressed="false""#));
    }
}
