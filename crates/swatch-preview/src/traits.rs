//! Trait definitions for interactive previews.

use std::time::Duration;

/// Name of a timer owned by one preview instance (e.g. `"hide"`).
pub type TimerKey = &'static str;

/// An interaction delivered to a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    /// Click on an element carrying `data-action`, with its `data-value`
    Action { name: String, value: Option<String> },

    /// Value change of a named input
    Input { name: String, value: String },

    /// A timer scheduled by the preview has expired
    Timer(TimerKey),
}

impl PreviewEvent {
    pub fn action(name: impl Into<String>) -> Self {
        Self::Action {
            name: name.into(),
            value: None,
        }
    }

    pub fn action_with(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Action {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A side effect requested while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fire `Timer(key)` after the delay. Re-scheduling a key restarts it.
    Schedule { key: TimerKey, after: Duration },

    /// Drop a pending timer, if any.
    Cancel(TimerKey),
}

/// Effects collected during one call to [`Preview::handle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    effects: Vec<Effect>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: TimerKey, after: Duration) {
        self.effects.push(Effect::Schedule { key, after });
    }

    pub fn cancel(&mut self, key: TimerKey) {
        self.effects.push(Effect::Cancel(key));
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn as_slice(&self) -> &[Effect] {
        &self.effects
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Effect> {
        self.effects.drain(..)
    }
}

/// A single documented example with its own state.
///
/// Instances are never shared: each one is created fresh by the registry and
/// dropped on unmount.
pub trait Preview: Send {
    /// Render the current state as an HTML fragment.
    ///
    /// Interactive elements carry `data-action` (and `data-value`) attributes;
    /// inputs carry `data-input` with the input name.
    fn render(&self) -> String;

    /// Apply an event to the state. Unknown events are ignored.
    fn handle(&mut self, event: &PreviewEvent, effects: &mut Effects);
}
