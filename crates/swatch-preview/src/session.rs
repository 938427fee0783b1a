//! Live preview sessions.
//!
//! A session owns the preview instances mounted by one client. It is driven
//! from a single task: client events go through [`LiveSession::dispatch`] and
//! timer expiries arrive through [`LiveSession::next_firing`] and are applied
//! with [`LiveSession::fire`].

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::registry::PreviewRegistry;
use crate::timer::{self, Firing, FiringSender, TimerSet};
use crate::traits::{Effect, Effects, Preview, PreviewEvent};

/// One mounted preview and its timers.
pub struct PreviewHost {
    preview: Box<dyn Preview>,
    timers: TimerSet,
}

impl PreviewHost {
    pub fn new(instance: impl Into<String>, preview: Box<dyn Preview>, sender: FiringSender) -> Self {
        Self {
            preview,
            timers: TimerSet::new(instance, sender),
        }
    }

    pub fn render(&self) -> String {
        self.preview.render()
    }

    /// Apply an event and its effects, returning the new HTML.
    pub fn dispatch(&mut self, event: &PreviewEvent) -> String {
        let mut effects = Effects::new();
        self.preview.handle(event, &mut effects);
        for effect in effects.drain() {
            match effect {
                Effect::Schedule { key, after } => {
                    self.timers.schedule(key, after);
                }
                Effect::Cancel(key) => {
                    self.timers.cancel(key);
                }
            }
        }
        self.preview.render()
    }

    /// Deliver a timer firing unless it is stale.
    pub fn fire(&mut self, firing: &Firing) -> Option<String> {
        if !self.timers.take_current(firing.key, firing.generation) {
            tracing::debug!(
                "Discarding stale timer {} for {}",
                firing.key,
                firing.instance
            );
            return None;
        }
        Some(self.dispatch(&PreviewEvent::Timer(firing.key)))
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

/// The preview instances mounted by one client.
pub struct LiveSession {
    registry: Arc<PreviewRegistry>,
    hosts: HashMap<String, PreviewHost>,
    sender: FiringSender,
    firings: mpsc::UnboundedReceiver<Firing>,
}

impl LiveSession {
    pub fn new(registry: Arc<PreviewRegistry>) -> Self {
        let (sender, firings) = timer::channel();
        Self {
            registry,
            hosts: HashMap::new(),
            sender,
            firings,
        }
    }

    /// Mount a fresh preview under `instance` and return its HTML.
    ///
    /// Mounting over an existing instance id replaces it; the old instance
    /// and its timers are dropped.
    pub fn mount(&mut self, instance: &str, component: &str, variant: usize) -> String {
        let preview = self.registry.create(component, variant);
        let host = PreviewHost::new(instance, preview, self.sender.clone());
        let html = host.render();
        if self.hosts.insert(instance.to_string(), host).is_some() {
            tracing::debug!("Remounted preview {}", instance);
        }
        html
    }

    /// Drop an instance and cancel its timers. Returns whether it existed.
    pub fn unmount(&mut self, instance: &str) -> bool {
        self.hosts.remove(instance).is_some()
    }

    /// Deliver a client event. Returns `None` for unknown instances.
    pub fn dispatch(&mut self, instance: &str, event: &PreviewEvent) -> Option<String> {
        let host = self.hosts.get_mut(instance)?;
        Some(host.dispatch(event))
    }

    /// Wait for the next timer expiry.
    pub async fn next_firing(&mut self) -> Option<Firing> {
        self.firings.recv().await
    }

    /// Apply a timer expiry.
    ///
    /// Returns the instance id and its new HTML, or `None` when the instance
    /// is gone or the firing is stale.
    pub fn fire(&mut self, firing: Firing) -> Option<(String, String)> {
        let Some(host) = self.hosts.get_mut(&firing.instance) else {
            tracing::debug!("Discarding timer for unmounted preview {}", firing.instance);
            return None;
        };
        let html = host.fire(&firing)?;
        Some((firing.instance, html))
    }

    pub fn contains(&self, instance: &str) -> bool {
        self.hosts.contains_key(instance)
    }

    /// Number of mounted instances.
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Pending timers across all instances.
    pub fn pending_timers(&self) -> usize {
        self.hosts.values().map(PreviewHost::pending_timers).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    fn session() -> LiveSession {
        LiveSession::new(Arc::new(PreviewRegistry::builtin()))
    }

    #[tokio::test(start_paused = true)]
    async fn snackbar_with_action_hides_after_undo() {
        let mut session = session();
        let html = session.mount("s1", "snackbar", 1);
        assert!(html.contains("Archive Email"));
        assert!(!html.contains("Email archived"));

        let html = session.dispatch("s1", &PreviewEvent::action("show")).unwrap();
        assert!(html.contains("Email archived"));
        assert!(html.contains(r#"data-action="undo""#));

        let html = session.dispatch("s1", &PreviewEvent::action("undo")).unwrap();
        assert!(html.contains("Undone"));
        assert!(!html.contains(r#"data-action="undo""#));

        let start = Instant::now();
        let firing = session.next_firing().await.unwrap();
        let (instance, html) = session.fire(firing).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(instance, "s1");
        assert!(elapsed >= Duration::from_secs(1) && elapsed < Duration::from_secs(2));
        assert!(!html.contains("Undone"));
        assert!(!html.contains("sw-snackbar__text"));
        assert_eq!(session.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn basic_snackbar_auto_hides_after_four_seconds() {
        let mut session = session();
        session.mount("s1", "snackbar", 0);
        session.dispatch("s1", &PreviewEvent::action("show"));

        let start = Instant::now();
        let firing = session.next_firing().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(4));

        let (_, html) = session.fire(firing).unwrap();
        assert!(!html.contains("Message sent"));
    }

    #[tokio::test(start_paused = true)]
    async fn instances_are_isolated() {
        let mut session = session();
        session.mount("a", "checkbox", 0);
        session.mount("b", "checkbox", 0);

        let a = session.dispatch("a", &PreviewEvent::action("toggle")).unwrap();
        let b = session.dispatch("b", &PreviewEvent::action("noop")).unwrap();

        assert!(a.contains(r#"aria-checked="true""#));
        assert!(b.contains(r#"aria-checked="false""#));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_cancels_timers() {
        let mut session = session();
        session.mount("chip", "chips", 0);
        session.dispatch("chip", &PreviewEvent::action("click"));
        assert_eq!(session.pending_timers(), 1);

        assert!(session.unmount("chip"));
        assert!(!session.unmount("chip"));
        assert_eq!(session.pending_timers(), 0);

        let result = tokio::time::timeout(Duration::from_secs(10), session.next_firing()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn remount_starts_fresh_and_discards_old_firings() {
        let mut session = session();
        session.mount("x", "chips", 3);
        session.dispatch("x", &PreviewEvent::action("click"));
        let stale = Firing {
            instance: "x".to_string(),
            key: "reset",
            generation: 1,
        };

        let html = session.mount("x", "chips", 3);
        assert!(!html.contains("Searching..."));
        assert_eq!(session.fire(stale), None);
    }

    #[tokio::test(start_paused = true)]
    async fn events_for_unknown_instances_are_ignored() {
        let mut session = session();

        assert_eq!(session.dispatch("ghost", &PreviewEvent::action("show")), None);
        assert_eq!(
            session.fire(Firing {
                instance: "ghost".to_string(),
                key: "hide",
                generation: 1,
            }),
            None
        );
        assert!(session.is_empty());
    }
}
