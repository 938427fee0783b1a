//! Tabs.

use crate::markup::classes;
use crate::traits::{Effects, Preview, PreviewEvent};

#[derive(Debug)]
struct TabsPreview {
    secondary: bool,
    tabs: &'static [(&'static str, &'static str)],
    active: usize,
}

impl Preview for TabsPreview {
    fn render(&self) -> String {
        let variant = if self.secondary { "secondary" } else { "primary" };
        let tabs: String = self
            .tabs
            .iter()
            .enumerate()
            .map(|(index, (icon, label))| {
                let active = index == self.active;
                let icon = if icon.is_empty() {
                    String::new()
                } else {
                    format!(r#"<span class="sw-tab__icon" aria-hidden="true">{icon}</span>"#)
                };
                format!(
                    r#"<button type="button" role="tab" class="{}" data-action="select" data-value="{index}" aria-selected="{active}">{icon}<span class="sw-tab__label">{label}</span></button>"#,
                    classes("sw-tab", &[("is-active", active)]),
                )
            })
            .collect();
        let panel = self.tabs.get(self.active).map_or("", |(_, label)| *label);

        format!(
            r#"<div class="sw-tabs sw-tabs--{variant}"><div class="sw-tabs__bar" role="tablist">{tabs}</div><div class="sw-tabs__panel" role="tabpanel">{panel} content</div></div>"#
        )
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
            if let Ok(index) = value.parse::<usize>() {
                if index < self.tabs.len() {
                    self.active = index;
                }
            }
        }
    }
}

pub(crate) fn tabs(variant: usize) -> Box<dyn Preview> {
    const PRIMARY: &[(&str, &str)] = &[("", "Flights"), ("", "Trips"), ("", "Explore")];
    const SECONDARY: &[(&str, &str)] = &[("", "Overview"), ("", "Specifications"), ("", "Reviews")];
    const ICONS: &[(&str, &str)] = &[("✈️", "Flights"), ("🧭", "Explore"), ("🏨", "Hotels")];

    let (secondary, tabs) = match variant {
        1 => (true, SECONDARY),
        2 => (false, ICONS),
        _ => (false, PRIMARY),
    };
    Box::new(TabsPreview {
        secondary,
        tabs,
        active: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_tab_by_index() {
        let mut preview = tabs(0);
        preview.handle(&PreviewEvent::action_with("select", "2"), &mut Effects::new());

        let html = preview.render();
        assert!(html.contains(r#"data-value="2" aria-selected="true""#));
        assert!(html.contains("Explore content"));
    }

    #[test]
    fn ignores_out_of_range_and_garbage() {
        let mut preview = tabs(1);
        preview.handle(&PreviewEvent::action_with("select", "7"), &mut Effects::new());
        preview.handle(&PreviewEvent::action_with("select", "x"), &mut Effects::new());

        assert!(preview.render().contains("Overview content"));
    }

    #[test]
    fn icon_tabs_render_icons() {
        let html = tabs(2).render();
        assert!(html.contains("✈️"));
        assert!(html.contains("Hotels"));
    }
}
