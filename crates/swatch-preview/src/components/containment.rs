//! Cards and dialogs.

use std::time::Duration;

use crate::traits::{Effects, Preview, PreviewEvent, TimerKey};

#[derive(Debug)]
struct CardPreview {
    style: &'static str,
    title: &'static str,
    body: &'static str,
}

impl Preview for CardPreview {
    fn render(&self) -> String {
        format!(
            r#"<div class="sw-preview-row"><article class="sw-card sw-card--{}"><h3 class="sw-card__title">{}</h3><p class="sw-card__body">{}</p></article></div>"#,
            self.style, self.title, self.body
        )
    }

    fn handle(&mut self, _event: &PreviewEvent, _effects: &mut Effects) {}
}

pub(crate) fn card(variant: usize) -> Box<dyn Preview> {
    let (style, title, body) = match variant {
        1 => ("filled", "Filled Card", "A card with a solid background color."),
        2 => ("outlined", "Outlined Card", "A card with a visible border."),
        _ => ("elevated", "Elevated Card", "A card with a drop shadow."),
    };
    Box::new(CardPreview { style, title, body })
}

const RESET: TimerKey = "reset";
const DELETED_NOTICE: Duration = Duration::from_secs(2);

/// Basic confirm dialog: open, then cancel or confirm.
#[derive(Debug, Default)]
struct ConfirmDialog {
    open: bool,
    result: Option<&'static str>,
}

/// Destructive dialog with an icon; a delete shows a notice for two seconds.
#[derive(Debug, Default)]
struct DeleteDialog {
    open: bool,
    deleted: bool,
}

fn dialog_markup(icon: Option<&str>, headline: &str, body: &str, actions: &str) -> String {
    let icon = icon
        .map(|i| format!(r#"<div class="sw-dialog__icon" aria-hidden="true">{i}</div>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="sw-scrim" data-action="dismiss"></div><div class="sw-dialog" role="dialog" aria-modal="true">{icon}<h2 class="sw-dialog__headline">{headline}</h2><p class="sw-dialog__body">{body}</p><div class="sw-dialog__actions">{actions}</div></div>"#
    )
}

impl Preview for ConfirmDialog {
    fn render(&self) -> String {
        let mut html = String::from(
            r#"<div class="sw-preview-stack"><button type="button" class="sw-btn sw-btn--filled" data-action="open">Open Dialog</button>"#,
        );
        if let Some(result) = self.result {
            html.push_str(&format!(r#"<p class="sw-caption">Result: {result}</p>"#));
        }
        if self.open {
            html.push_str(&dialog_markup(
                None,
                "Confirm Action",
                "Are you sure you want to proceed?",
                r#"<button type="button" class="sw-btn sw-btn--text" data-action="cancel">Cancel</button><button type="button" class="sw-btn sw-btn--text" data-action="confirm">Confirm</button>"#,
            ));
        }
        html.push_str("</div>");
        html
    }

    fn handle(&mut self, event: &PreviewEvent, _effects: &mut Effects) {
        let PreviewEvent::Action { name, .. } = event else {
            return;
        };
        match name.as_str() {
            "open" => self.open = true,
            "cancel" if self.open => {
                self.open = false;
                self.result = Some("Cancelled");
            }
            "confirm" if self.open => {
                self.open = false;
                self.result = Some("Confirmed!");
            }
            "dismiss" => self.open = false,
            _ => {}
        }
    }
}

impl Preview for DeleteDialog {
    fn render(&self) -> String {
        let mut html = String::from(
            r#"<div class="sw-preview-stack"><button type="button" class="sw-btn sw-btn--danger" data-action="open">Delete Item</button>"#,
        );
        if self.deleted {
            html.push_str(r#"<p class="sw-caption sw-caption--error">Item deleted!</p>"#);
        }
        if self.open {
            html.push_str(&dialog_markup(
                Some("🗑️"),
                "Delete file?",
                "This action cannot be undone.",
                r#"<button type="button" class="sw-btn sw-btn--text" data-action="cancel">Cancel</button><button type="button" class="sw-btn sw-btn--danger" data-action="delete">Delete</button>"#,
            ));
        }
        html.push_str("</div>");
        html
    }

    fn handle(&mut self, event: &PreviewEvent, effects: &mut Effects) {
        match event {
            PreviewEvent::Action { name, .. } => match name.as_str() {
                "open" => self.open = true,
                "cancel" | "dismiss" => self.open = false,
                "delete" if self.open => {
                    self.open = false;
                    self.deleted = true;
                    effects.schedule(RESET, DELETED_NOTICE);
                }
                _ => {}
            },
            PreviewEvent::Timer(RESET) => self.deleted = false,
            _ => {}
        }
    }
}

pub(crate) fn dialog(variant: usize) -> Box<dyn Preview> {
    match variant {
        1 => Box::new(DeleteDialog::default()),
        _ => Box::new(ConfirmDialog::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(preview: &mut dyn Preview, event: PreviewEvent) -> Effects {
        let mut effects = Effects::new();
        preview.handle(&event, &mut effects);
        effects
    }

    #[test]
    fn confirm_dialog_records_result() {
        let mut preview = dialog(0);
        assert!(!preview.render().contains("role=\"dialog\""));

        send(preview.as_mut(), PreviewEvent::action("open"));
        assert!(preview.render().contains("Are you sure you want to proceed?"));

        send(preview.as_mut(), PreviewEvent::action("confirm"));
        let html = preview.render();
        assert!(!html.contains("role=\"dialog\""));
        assert!(html.contains("Confirmed!"));

        send(preview.as_mut(), PreviewEvent::action("open"));
        send(preview.as_mut(), PreviewEvent::action("cancel"));
        assert!(preview.render().contains("Cancelled"));
    }

    #[test]
    fn confirm_without_open_dialog_is_ignored() {
        let mut preview = dialog(0);
        send(preview.as_mut(), PreviewEvent::action("confirm"));

        assert!(!preview.render().contains("Result:"));
    }

    #[test]
    fn delete_shows_notice_until_timer() {
        let mut preview = dialog(1);
        send(preview.as_mut(), PreviewEvent::action("open"));
        let effects = send(preview.as_mut(), PreviewEvent::action("delete"));

        assert!(!effects.is_empty());
        assert!(preview.render().contains("Item deleted!"));

        send(preview.as_mut(), PreviewEvent::Timer(RESET));
        assert!(!preview.render().contains("Item deleted!"));
    }
}
