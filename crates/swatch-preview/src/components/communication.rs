//! Badges, progress indicators and snackbars.

use std::time::Duration;

use crate::markup::icon;
use crate::traits::{Effects, Preview, PreviewEvent, TimerKey};

/// Badge label with an overflow cap, e.g. `999+`.
pub(crate) fn badge_label(value: u32, max: u32) -> String {
    if value > max {
        format!("{max}+")
    } else {
        value.to_string()
    }
}

#[derive(Debug)]
struct BadgePreview {
    icon: &'static str,
    value: Option<(u32, u32)>,
}

impl Preview for BadgePreview {
    fn render(&self) -> String {
        let badge = match self.value {
            Some((value, max)) => format!(
                r#"<span class="sw-badge sw-badge--large">{}</span>"#,
                badge_label(value, max)
            ),
            None => r#"<span class="sw-badge sw-badge--small"></span>"#.to_string(),
        };
        format!(
            r#"<div class="sw-preview-row"><span class="sw-badge-anchor">{}{badge}</span></div>"#,
            icon(self.icon)
        )
    }

    fn handle(&mut self, _event: &PreviewEvent, _effects: &mut Effects) {}
}

pub(crate) fn badge(variant: usize) -> Box<dyn Preview> {
    let (icon, value) = match variant {
        1 => ("mail", Some((5, 999))),
        2 => ("chat", Some((1200, 999))),
        _ => ("notifications", None),
    };
    Box::new(BadgePreview { icon, value })
}

#[derive(Debug)]
struct ProgressPreview {
    linear: bool,
    value: Option<f32>,
}

impl Preview for ProgressPreview {
    fn render(&self) -> String {
        let shape = if self.linear { "linear" } else { "circular" };
        let (class, aria) = match self.value {
            Some(value) => (
                format!("sw-progress sw-progress--{shape}"),
                format!(
                    r#" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{}" style="--progress: {value}""#,
                    (value * 100.0).round()
                ),
            ),
            None => (
                format!("sw-progress sw-progress--{shape} is-indeterminate"),
                String::new(),
            ),
        };
        format!(
            r#"<div class="sw-preview-row"><div class="{class}" role="progressbar"{aria}><div class="sw-progress__indicator"></div></div></div>"#
        )
    }

    fn handle(&mut self, _event: &PreviewEvent, _effects: &mut Effects) {}
}

pub(crate) fn progress(variant: usize) -> Box<dyn Preview> {
    let (linear, value) = match variant {
        1 => (false, Some(0.7)),
        2 => (true, None),
        3 => (true, Some(0.4)),
        _ => (false, None),
    };
    Box::new(ProgressPreview { linear, value })
}

const HIDE: TimerKey = "hide";
const AUTO_HIDE: Duration = Duration::from_secs(4);
const HIDE_AFTER_UNDO: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnackbarKind {
    Basic,
    WithAction,
    WithClose,
}

/// Snackbar shown by a trigger button.
///
/// Shown snackbars auto-hide after four seconds. Undo replaces the message
/// with "Undone" and hides one second later; close hides immediately.
#[derive(Debug)]
struct SnackbarPreview {
    kind: SnackbarKind,
    visible: bool,
    undone: bool,
}

impl SnackbarPreview {
    fn texts(&self) -> (&'static str, &'static str) {
        match self.kind {
            SnackbarKind::Basic => ("Send Message", "Message sent"),
            SnackbarKind::WithAction => ("Archive Email", "Email archived"),
            SnackbarKind::WithClose => ("Delete Item", "Item deleted"),
        }
    }

    fn hide(&mut self) {
        self.visible = false;
        self.undone = false;
    }
}

impl Preview for SnackbarPreview {
    fn render(&self) -> String {
        let (trigger, message) = self.texts();
        let trigger_class = if self.kind == SnackbarKind::WithClose {
            "sw-btn sw-btn--danger"
        } else {
            "sw-btn sw-btn--filled"
        };

        let mut snackbar = String::new();
        if self.visible {
            let text = if self.undone { "Undone" } else { message };
            snackbar.push_str(r#"<div class="sw-snackbar" role="status">"#);
            snackbar.push_str(&format!(r#"<span class="sw-snackbar__text">{text}</span>"#));
            if self.kind != SnackbarKind::Basic && !self.undone {
                snackbar.push_str(
                    r#"<button type="button" class="sw-snackbar__action" data-action="undo">Undo</button>"#,
                );
            }
            if self.kind == SnackbarKind::WithClose {
                snackbar.push_str(&format!(
                    r#"<button type="button" class="sw-snackbar__close" data-action="close" aria-label="Close">{}</button>"#,
                    "✕"
                ));
            }
            snackbar.push_str("</div>");
        }

        format!(
            r#"<div class="sw-preview-stack"><button type="button" class="{trigger_class}" data-action="show">{trigger}</button>{snackbar}</div>"#
        )
    }

    fn handle(&mut self, event: &PreviewEvent, effects: &mut Effects) {
        match event {
            PreviewEvent::Action { name, .. } => match name.as_str() {
                "show" => {
                    self.visible = true;
                    self.undone = false;
                    effects.schedule(HIDE, AUTO_HIDE);
                }
                "undo" if self.visible && !self.undone && self.kind != SnackbarKind::Basic => {
                    self.undone = true;
                    effects.schedule(HIDE, HIDE_AFTER_UNDO);
                }
                "close" if self.visible => {
                    self.hide();
                    effects.cancel(HIDE);
                }
                _ => {}
            },
            PreviewEvent::Timer(HIDE) => self.hide(),
            _ => {}
        }
    }
}

pub(crate) fn snackbar(variant: usize) -> Box<dyn Preview> {
    let kind = match variant {
        1 => SnackbarKind::WithAction,
        2 => SnackbarKind::WithClose,
        _ => SnackbarKind::Basic,
    };
    Box::new(SnackbarPreview {
        kind,
        visible: false,
        undone: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Effect;
    use pretty_assertions::assert_eq;

    fn send(preview: &mut dyn Preview, event: PreviewEvent) -> Effects {
        let mut effects = Effects::new();
        preview.handle(&event, &mut effects);
        effects
    }

    #[test]
    fn caps_badge_values() {
        assert_eq!(badge_label(5, 999), "5");
        assert_eq!(badge_label(999, 999), "999");
        assert_eq!(badge_label(1200, 999), "999+");
        assert!(badge(2).render().contains(">999+<"));
    }

    #[test]
    fn snackbar_show_schedules_auto_hide() {
        let mut preview = snackbar(0);
        let effects = send(preview.as_mut(), PreviewEvent::action("show"));

        assert_eq!(
            effects.as_slice(),
            &[Effect::Schedule {
                key: HIDE,
                after: Duration::from_secs(4)
            }]
        );
        assert!(preview.render().contains("Message sent"));

        send(preview.as_mut(), PreviewEvent::Timer(HIDE));
        assert!(!preview.render().contains("Message sent"));
    }

    #[test]
    fn basic_snackbar_has_no_undo() {
        let mut preview = snackbar(0);
        send(preview.as_mut(), PreviewEvent::action("show"));
        let effects = send(preview.as_mut(), PreviewEvent::action("undo"));

        assert!(effects.is_empty());
        assert!(!preview.render().contains("Undone"));
    }

    #[test]
    fn undo_replaces_message_and_shortens_timer() {
        let mut preview = snackbar(1);
        send(preview.as_mut(), PreviewEvent::action("show"));
        let effects = send(preview.as_mut(), PreviewEvent::action("undo"));

        assert_eq!(
            effects.as_slice(),
            &[Effect::Schedule {
                key: HIDE,
                after: Duration::from_secs(1)
            }]
        );
        let html = preview.render();
        assert!(html.contains("Undone"));
        assert!(!html.contains("Email archived"));
        assert!(!html.contains(r#"data-action="undo""#));
    }

    #[test]
    fn close_hides_and_cancels() {
        let mut preview = snackbar(2);
        send(preview.as_mut(), PreviewEvent::action("show"));
        assert!(preview.render().contains(r#"data-action="close""#));

        let effects = send(preview.as_mut(), PreviewEvent::action("close"));

        assert_eq!(effects.as_slice(), &[Effect::Cancel(HIDE)]);
        assert!(!preview.render().contains("Item deleted"));
    }
}
