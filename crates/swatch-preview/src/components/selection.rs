//! Checkboxes, chips, menus, radio buttons, sliders and switches.

use std::time::Duration;

use crate::markup::{classes, escape, icon};
use crate::traits::{Effects, Preview, PreviewEvent, TimerKey};

const RESET: TimerKey = "reset";

/// Visual state of a tri-state checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl CheckState {
    /// Parent state derived from its children.
    pub fn of(children: &[bool]) -> Self {
        let checked = children.iter().filter(|c| **c).count();
        if checked == 0 {
            Self::Unchecked
        } else if checked == children.len() {
            Self::Checked
        } else {
            Self::Indeterminate
        }
    }

    fn aria(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Indeterminate => "mixed",
            Self::Checked => "true",
        }
    }
}

fn checkbox_control(state: CheckState, action: &str, value: Option<usize>) -> String {
    let value = value
        .map(|v| format!(r#" data-value="{v}""#))
        .unwrap_or_default();
    let mark = match state {
        CheckState::Unchecked => "",
        CheckState::Indeterminate => "−",
        CheckState::Checked => "✓",
    };
    format!(
        r#"<button type="button" role="checkbox" class="{}" data-action="{action}"{value} aria-checked="{}"><span class="sw-checkbox__mark">{mark}</span></button>"#,
        classes(
            "sw-checkbox",
            &[
                ("is-checked", state == CheckState::Checked),
                ("is-indeterminate", state == CheckState::Indeterminate)
            ]
        ),
        state.aria(),
    )
}

fn bool_state(checked: bool) -> CheckState {
    if checked {
        CheckState::Checked
    } else {
        CheckState::Unchecked
    }
}

#[derive(Debug)]
struct CheckboxPreview {
    label: Option<&'static str>,
    checked: bool,
}

impl Preview for CheckboxPreview {
    fn render(&self) -> String {
        let control = checkbox_control(bool_state(self.checked), "toggle", None);
        match self.label {
            Some(label) => format!(
                r#"<div class="sw-preview-row"><label class="sw-check-label">{control}<span>{label}</span></label></div>"#
            ),
            None => format!(r#"<div class="sw-preview-row">{control}</div>"#),
        }
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        if matches!(event, PreviewEvent::Action { name, .. } if name == "toggle") {
            self.checked = !self.checked;
        }
    }
}

/// "Select All" parent over three options.
#[derive(Debug, Default)]
struct IndeterminateCheckbox {
    items: [bool; 3],
}

impl IndeterminateCheckbox {
    fn state(&self) -> CheckState {
        CheckState::of(&self.items)
    }
}

impl Preview for IndeterminateCheckbox {
    fn render(&self) -> String {
        let children: String = self
            .items
            .iter()
            .enumerate()
            .map(|(index, checked)| {
                format!(
                    r#"<label class="sw-check-label">{}<span>Option {}</span></label>"#,
                    checkbox_control(bool_state(*checked), "toggle", Some(index)),
                    index + 1
                )
            })
            .collect();
        format!(
            r#"<div class="sw-check-group"><label class="sw-check-label sw-check-label--parent">{}<span>Select All</span></label><div class="sw-check-group__children">{children}</div></div>"#,
            checkbox_control(self.state(), "toggle-all", None)
        )
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        let PreviewEvent::Action { name, value } = event else {
            return;
        };
        match name.as_str() {
            "toggle-all" => {
                let next = self.state() != CheckState::Checked;
                self.items = [next; 3];
            }
            "toggle" => {
                let index = value.as_deref().and_then(|v| v.parse::<usize>().ok());
                if let Some(item) = index.and_then(|i| self.items.get_mut(i)) {
                    *item = !*item;
                }
            }
            _ => {}
        }
    }
}

pub(crate) fn checkbox(variant: usize) -> Box<dyn Preview> {
    match variant {
        1 => Box::new(CheckboxPreview {
            label: Some("Accept terms and conditions"),
            checked: false,
        }),
        2 => Box::new(IndeterminateCheckbox::default()),
        _ => Box::new(CheckboxPreview {
            label: None,
            checked: false,
        }),
    }
}

/// Chip variants and their state.
#[derive(Debug)]
enum ChipPreview {
    /// Flashes "Alarm set!" for a second.
    Assist { acknowledged: bool },
    Filter { selected: bool },
    /// Removable; can be added back.
    Input { visible: bool },
    /// Shows "Searching..." for a moment.
    Suggestion { searching: bool },
}

const ASSIST_FLASH: Duration = Duration::from_secs(1);
const SUGGESTION_FLASH: Duration = Duration::from_millis(1500);

impl Preview for ChipPreview {
    fn render(&self) -> String {
        let chip = match self {
            Self::Assist { acknowledged } => format!(
                r#"<button type="button" class="sw-chip sw-chip--assist" data-action="click">{}{}</button>"#,
                icon("event"),
                if *acknowledged { "Alarm set!" } else { "Set alarm" }
            ),
            Self::Filter { selected } => format!(
                r#"<button type="button" class="{}" data-action="toggle" aria-pressed="{selected}">{}Vegetarian</button>"#,
                classes("sw-chip sw-chip--filter", &[("is-selected", *selected)]),
                if *selected { "✓ " } else { "" }
            ),
            Self::Input { visible: true } => r#"<span class="sw-chip sw-chip--input">John Doe<button type="button" class="sw-chip__remove" data-action="remove" aria-label="Remove">✕</button></span>"#.to_string(),
            Self::Input { visible: false } => r#"<button type="button" class="sw-chip sw-chip--assist" data-action="restore">+ Add back</button>"#.to_string(),
            Self::Suggestion { searching } => format!(
                r#"<button type="button" class="sw-chip sw-chip--suggestion" data-action="click">{}</button>"#,
                if *searching {
                    "Searching...".to_string()
                } else {
                    escape(r#"Try "weather today""#)
                }
            ),
        };
        format!(r#"<div class="sw-preview-row">{chip}</div>"#)
    }

    fn handle(&mut self, event: &PreviewEvent, effects: &mut Effects) {
        let name = match event {
            PreviewEvent::Action { name, .. } => name.as_str(),
            PreviewEvent::Timer(RESET) => {
                match self {
                    Self::Assist { acknowledged } => *acknowledged = false,
                    Self::Suggestion { searching } => *searching = false,
                    _ => {}
                }
                return;
            }
            _ => return,
        };

        match (self, name) {
            (Self::Assist { acknowledged }, "click") => {
                *acknowledged = true;
                effects.schedule(RESET, ASSIST_FLASH);
            }
            (Self::Filter { selected }, "toggle") => *selected = !*selected,
            (Self::Input { visible }, "remove") => *visible = false,
            (Self::Input { visible }, "restore") => *visible = true,
            (Self::Suggestion { searching }, "click") => {
                *searching = true;
                effects.schedule(RESET, SUGGESTION_FLASH);
            }
            _ => {}
        }
    }
}

pub(crate) fn chips(variant: usize) -> Box<dyn Preview> {
    Box::new(match variant {
        1 => ChipPreview::Filter { selected: false },
        2 => ChipPreview::Input { visible: true },
        3 => ChipPreview::Suggestion { searching: false },
        _ => ChipPreview::Assist {
            acknowledged: false,
        },
    })
}

const SELECTION_NOTICE: Duration = Duration::from_millis(1500);

/// A menu item; `None` is a divider.
type MenuItem = Option<(&'static str, &'static str)>;

/// Dropdown menu under an anchor button.
#[derive(Debug)]
struct MenuPreview {
    anchor: &'static str,
    items: &'static [MenuItem],
    /// Whether a chosen item is announced for a moment.
    announce: bool,
    open: bool,
    selected: Option<&'static str>,
}

impl Preview for MenuPreview {
    fn render(&self) -> String {
        let arrow = if self.open { "▲" } else { "▼" };
        let mut html = format!(
            r#"<div class="sw-menu-anchor"><button type="button" class="sw-btn sw-btn--filled" data-action="toggle" aria-expanded="{}">{} <span aria-hidden="true">{arrow}</span></button>"#,
            self.open, self.anchor
        );
        if let Some(selected) = self.selected {
            html.push_str(&format!(r#"<div class="sw-tooltip">{selected}</div>"#));
        }
        if self.open {
            html.push_str(r#"<div class="sw-menu" role="menu">"#);
            for item in self.items {
                match item {
                    Some((label, glyph)) => {
                        let danger = *label == "Logout";
                        let glyph = if glyph.is_empty() {
                            String::new()
                        } else {
                            icon(glyph)
                        };
                        html.push_str(&format!(
                            r#"<button type="button" role="menuitem" class="{}" data-action="select" data-value="{label}">{glyph}{label}</button>"#,
                            classes("sw-menu__item", &[("is-danger", danger)])
                        ));
                    }
                    None => html.push_str(r#"<div class="sw-menu__divider" role="separator"></div>"#),
                }
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
        html
    }

    fn handle(&mut self, event: &PreviewEvent, effects: &mut Effects) {
        match event {
            PreviewEvent::Action { name, value } => match name.as_str() {
                "toggle" => self.open = !self.open,
                "dismiss" => self.open = false,
                "select" if self.open => {
                    self.open = false;
                    let chosen = self
                        .items
                        .iter()
                        .flatten()
                        .find(|(label, _)| Some(*label) == value.as_deref())
                        .map(|(label, _)| *label);
                    if self.announce && chosen.is_some() {
                        self.selected = chosen;
                        effects.schedule(RESET, SELECTION_NOTICE);
                    }
                }
                _ => {}
            },
            PreviewEvent::Timer(RESET) => self.selected = None,
            _ => {}
        }
    }
}

pub(crate) fn menus(variant: usize) -> Box<dyn Preview> {
    const BASIC: &[MenuItem] = &[
        Some(("Cut", "content_cut")),
        Some(("Copy", "content_copy")),
        Some(("Paste", "content_paste")),
    ];
    const WITH_DIVIDER: &[MenuItem] = &[
        Some(("Profile", "")),
        Some(("Settings", "")),
        None,
        Some(("Logout", "")),
    ];

    let (anchor, items, announce) = match variant {
        1 => ("Settings", WITH_DIVIDER, false),
        _ => ("Open Menu", BASIC, true),
    };
    Box::new(MenuPreview {
        anchor,
        items,
        announce,
        open: false,
        selected: None,
    })
}

const SIZES: [(&str, &str); 3] = [("small", "Small"), ("medium", "Medium"), ("large", "Large")];

#[derive(Debug)]
struct RadioGroup {
    selected: &'static str,
}

impl Preview for RadioGroup {
    fn render(&self) -> String {
        let options: String = SIZES
            .iter()
            .map(|(value, label)| {
                let checked = *value == self.selected;
                format!(
                    r#"<label class="sw-radio-label"><button type="button" role="radio" class="{}" data-action="select" data-value="{value}" aria-checked="{checked}"></button><span>{label}</span></label>"#,
                    classes("sw-radio", &[("is-checked", checked)])
                )
            })
            .collect();
        format!(r#"<div class="sw-radio-group" role="radiogroup">{options}</div>"#)
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        if let PreviewEvent::Action {
            name,
            value: Some(value),
        } = event
        {
            if name != "select" {
                return;
            }
            if let Some((key, _)) = SIZES.iter().find(|(key, _)| key == value) {
                self.selected = *key;
            }
        }
    }
}

pub(crate) fn radio_group(_variant: usize) -> Box<dyn Preview> {
    Box::new(RadioGroup { selected: "small" })
}

/// Snap `value` to the nearest multiple of `step` within `0..=100`.
pub(crate) fn snap(value: f64, step: u32) -> u32 {
    let clamped = value.clamp(0.0, 100.0);
    if step <= 1 {
        return clamped.round() as u32;
    }
    let step = f64::from(step);
    ((clamped / step).round() * step) as u32
}

#[derive(Debug)]
enum SliderPreview {
    Single { value: u32, step: u32 },
    Range { start: u32, end: u32 },
}

fn range_input(name: &str, value: u32, step: u32, label: &str) -> String {
    format!(
        r#"<input type="range" class="sw-slider__input" min="0" max="100" step="{step}" value="{value}" data-input="{name}" aria-label="{label}">"#
    )
}

impl Preview for SliderPreview {
    fn render(&self) -> String {
        match self {
            Self::Single { value, step } => {
                let ticks = if *step > 1 { " sw-slider--discrete" } else { "" };
                format!(
                    r#"<div class="sw-slider{ticks}">{}<output class="sw-slider__value">{value}</output></div>"#,
                    range_input("value", *value, *step, "Value")
                )
            }
            Self::Range { start, end } => format!(
                r#"<div class="sw-slider sw-slider--range">{}{}<output class="sw-slider__value">{start} – {end}</output></div>"#,
                range_input("start", *start, 1, "Start"),
                range_input("end", *end, 1, "End")
            ),
        }
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        let PreviewEvent::Input { name, value: raw } = event else {
            return;
        };
        let Ok(parsed) = raw.trim().parse::<f64>() else {
            return;
        };

        match (self, name.as_str()) {
            (Self::Single { value, step }, "value") => *value = snap(parsed, *step),
            (Self::Range { start, end }, "start") => *start = snap(parsed, 1).min(*end),
            (Self::Range { start, end }, "end") => *end = snap(parsed, 1).max(*start),
            _ => {}
        }
    }
}

pub(crate) fn slider(variant: usize) -> Box<dyn Preview> {
    Box::new(match variant {
        1 => SliderPreview::Single {
            value: 50,
            step: 25,
        },
        2 => SliderPreview::Range { start: 25, end: 75 },
        _ => SliderPreview::Single { value: 50, step: 1 },
    })
}

#[derive(Debug)]
struct SwitchPreview {
    label: Option<&'static str>,
    icons: bool,
    on: bool,
}

impl Preview for SwitchPreview {
    fn render(&self) -> String {
        let thumb = if self.icons {
            icon(if self.on { "check" } else { "close" })
        } else {
            String::new()
        };
        let control = format!(
            r#"<button type="button" role="switch" class="{}" data-action="toggle" aria-checked="{}"><span class="sw-switch__thumb">{thumb}</span></button>"#,
            classes("sw-switch", &[("is-on", self.on), ("has-icons", self.icons)]),
            self.on
        );
        match self.label {
            Some(label) => format!(
                r#"<div class="sw-preview-row"><label class="sw-switch-label"><span>{label}</span>{control}</label></div>"#
            ),
            None => format!(r#"<div class="sw-preview-row">{control}</div>"#),
        }
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        if matches!(event, PreviewEvent::Action { name, .. } if name == "toggle") {
            self.on = !self.on;
        }
    }
}

pub(crate) fn switch(variant: usize) -> Box<dyn Preview> {
    let (label, icons, on) = match variant {
        1 => (Some("Enable notifications"), false, true),
        2 => (None, true, false),
        _ => (None, false, false),
    };
    Box::new(SwitchPreview { label, icons, on })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn send(preview: &mut dyn Preview, event: PreviewEvent) -> Effects {
        let mut effects = Effects::new();
        preview.handle(&event, &mut effects);
        effects
    }

    fn toggle(preview: &mut dyn Preview, index: usize) {
        send(preview, PreviewEvent::action_with("toggle", index.to_string()));
    }

    fn parent_aria(html: &str) -> &str {
        let marker = r#"data-action="toggle-all" aria-checked=""#;
        let start = html.find(marker).unwrap() + marker.len();
        let end = start + html[start..].find('"').unwrap();
        &html[start..end]
    }

    #[test]
    fn derives_parent_state() {
        assert_eq!(CheckState::of(&[false, false, false]), CheckState::Unchecked);
        assert_eq!(CheckState::of(&[false, true, false]), CheckState::Indeterminate);
        assert_eq!(CheckState::of(&[true, true, true]), CheckState::Checked);
    }

    #[test]
    fn indeterminate_checkbox_scenario() {
        let mut preview = checkbox(2);
        assert_eq!(parent_aria(&preview.render()), "false");

        toggle(preview.as_mut(), 1);
        assert_eq!(parent_aria(&preview.render()), "mixed");

        // Parent with some checked checks everything.
        send(preview.as_mut(), PreviewEvent::action("toggle-all"));
        let html = preview.render();
        assert_eq!(parent_aria(&html), "true");
        assert_eq!(html.matches(r#"aria-checked="true""#).count(), 4);

        // Parent with all checked clears everything.
        send(preview.as_mut(), PreviewEvent::action("toggle-all"));
        let html = preview.render();
        assert_eq!(parent_aria(&html), "false");
        assert_eq!(html.matches(r#"aria-checked="false""#).count(), 4);

        toggle(preview.as_mut(), 0);
        toggle(preview.as_mut(), 1);
        toggle(preview.as_mut(), 2);
        assert_eq!(parent_aria(&preview.render()), "true");
    }

    #[test]
    fn labelled_checkbox_toggles() {
        let mut preview = checkbox(1);
        assert!(preview.render().contains("Accept terms and conditions"));

        send(preview.as_mut(), PreviewEvent::action("toggle"));
        assert!(preview.render().contains(r#"aria-checked="true""#));
    }

    #[test]
    fn assist_chip_flashes() {
        let mut preview = chips(0);
        let effects = send(preview.as_mut(), PreviewEvent::action("click"));
        assert!(!effects.is_empty());
        assert!(preview.render().contains("Alarm set!"));

        send(preview.as_mut(), PreviewEvent::Timer(RESET));
        assert!(preview.render().contains("Set alarm"));
    }

    #[test]
    fn input_chip_can_be_removed_and_restored() {
        let mut preview = chips(2);
        send(preview.as_mut(), PreviewEvent::action("remove"));
        assert!(preview.render().contains("+ Add back"));

        send(preview.as_mut(), PreviewEvent::action("restore"));
        assert!(preview.render().contains("John Doe"));
    }

    #[test]
    fn chip_flash_durations() {
        use crate::traits::Effect;

        let mut assist = chips(0);
        let effects = send(assist.as_mut(), PreviewEvent::action("click"));
        assert_eq!(
            effects.as_slice(),
            &[Effect::Schedule {
                key: RESET,
                after: Duration::from_secs(1)
            }]
        );

        let mut suggestion = chips(3);
        let effects = send(suggestion.as_mut(), PreviewEvent::action("click"));
        assert!(suggestion.render().contains("Searching..."));
        assert_eq!(
            effects.as_slice(),
            &[Effect::Schedule {
                key: RESET,
                after: Duration::from_millis(1500)
            }]
        );

        send(suggestion.as_mut(), PreviewEvent::Timer(RESET));
        assert!(!suggestion.render().contains("Searching..."));
    }

    #[test]
    fn suggestion_chip_escapes_quotes() {
        let html = chips(3).render();
        assert!(html.contains("Try &quot;weather today&quot;"));
    }

    #[test]
    fn menu_selection_closes_and_announces() {
        let mut preview = menus(0);
        send(preview.as_mut(), PreviewEvent::action("toggle"));
        assert!(preview.render().contains(r#"role="menu""#));

        let effects = send(preview.as_mut(), PreviewEvent::action_with("select", "Copy"));
        let html = preview.render();
        assert!(!effects.is_empty());
        assert!(!html.contains(r#"role="menu""#));
        assert!(html.contains(r#"<div class="sw-tooltip">Copy</div>"#));

        send(preview.as_mut(), PreviewEvent::Timer(RESET));
        assert!(!preview.render().contains("sw-tooltip"));
    }

    #[test]
    fn divider_menu_renders_separator() {
        let mut preview = menus(1);
        send(preview.as_mut(), PreviewEvent::action("toggle"));
        let html = preview.render();

        assert!(html.contains(r#"role="separator""#));
        assert!(html.contains("is-danger"));
    }

    #[test]
    fn radio_group_selects_one() {
        let mut preview = radio_group(0);
        send(preview.as_mut(), PreviewEvent::action_with("select", "large"));

        let html = preview.render();
        assert_eq!(html.matches(r#"aria-checked="true""#).count(), 1);
        assert!(html.contains(r#"data-value="large" aria-checked="true""#));
    }

    #[test]
    fn slider_snaps_and_clamps() {
        assert_eq!(snap(62.0, 25), 50);
        assert_eq!(snap(63.0, 25), 75);
        assert_eq!(snap(140.0, 1), 100);
        assert_eq!(snap(-3.0, 1), 0);

        let mut preview = slider(1);
        send(preview.as_mut(), PreviewEvent::input("value", "80"));
        assert!(preview.render().contains(r#"value="75""#));
    }

    #[test]
    fn range_slider_keeps_order() {
        let mut preview = slider(2);
        send(preview.as_mut(), PreviewEvent::input("start", "90"));
        assert!(preview.render().contains("75 – 75"));

        send(preview.as_mut(), PreviewEvent::input("end", "10"));
        assert!(preview.render().contains("75 – 75"));
    }

    #[test]
    fn switch_defaults() {
        assert!(switch(0).render().contains(r#"aria-checked="false""#));
        assert!(switch(1).render().contains(r#"aria-checked="true""#));
        assert!(switch(2).render().contains(">close<"));
    }
}
