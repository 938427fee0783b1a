//! Built-in previews, grouped by navigation category.

mod actions;
mod communication;
mod containment;
mod inputs;
mod navigation;
mod selection;

use crate::registry::PreviewFactory;

pub use selection::CheckState;

/// `(component id, variant count, factory)` for every built-in preview.
pub(crate) const BUILTIN: &[(&str, usize, PreviewFactory)] = &[
    ("button", 7, actions::button),
    ("fab", 4, actions::fab),
    ("icon-button", 5, actions::icon_button),
    ("segmented-buttons", 2, actions::segmented_buttons),
    ("badge", 3, communication::badge),
    ("progress-indicators", 4, communication::progress),
    ("snackbar", 3, communication::snackbar),
    ("card", 3, containment::card),
    ("dialog", 2, containment::dialog),
    ("tabs", 3, navigation::tabs),
    ("checkbox", 3, selection::checkbox),
    ("chips", 4, selection::chips),
    ("menus", 2, selection::menus),
    ("radio-button", 1, selection::radio_group),
    ("slider", 3, selection::slider),
    ("switch", 3, selection::switch),
    ("text-field", 5, inputs::text_field),
];

