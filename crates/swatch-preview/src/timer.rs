//! Delayed actions and timer bookkeeping.
//!
//! Timers run as tokio tasks that post a [`Firing`] back to the owning
//! session's channel. Each armed timer has a generation number; the session
//! only delivers a firing whose generation still matches the armed timer, so
//! a firing that raced a cancel or a re-schedule is discarded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::traits::TimerKey;

/// A timer expiry posted back to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firing {
    pub instance: String,
    pub key: TimerKey,
    pub generation: u64,
}

/// Create the channel timers report to.
pub fn channel() -> (FiringSender, mpsc::UnboundedReceiver<Firing>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sender = FiringSender {
        tx,
        generations: Arc::new(AtomicU64::new(0)),
    };
    (sender, rx)
}

/// Sending half of a session's timer channel.
///
/// Clones share one generation counter, so generations are unique within a
/// session even across remounts of the same instance id.
#[derive(Debug, Clone)]
pub struct FiringSender {
    tx: mpsc::UnboundedSender<Firing>,
    generations: Arc<AtomicU64>,
}

impl FiringSender {
    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// A one-shot action running after a delay.
///
/// Dropping the handle cancels the action if it has not run yet.
#[derive(Debug)]
pub struct DelayedAction {
    handle: JoinHandle<()>,
}

impl DelayedAction {
    /// Run `action` after `after` on the current tokio runtime.
    pub fn spawn<F>(after: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            action();
        });
        Self { handle }
    }

    /// Cancel the action.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedAction {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct Armed {
    generation: u64,
    _action: DelayedAction,
}

/// Armed timers of one preview instance.
pub struct TimerSet {
    instance: String,
    sender: FiringSender,
    armed: HashMap<TimerKey, Armed>,
}

impl TimerSet {
    pub fn new(instance: impl Into<String>, sender: FiringSender) -> Self {
        Self {
            instance: instance.into(),
            sender,
            armed: HashMap::new(),
        }
    }

    /// Arm `key`, replacing any pending timer with the same key.
    ///
    /// Returns the generation of the new timer.
    pub fn schedule(&mut self, key: TimerKey, after: Duration) -> u64 {
        let generation = self.sender.next_generation();
        let firing = Firing {
            instance: self.instance.clone(),
            key,
            generation,
        };
        let tx = self.sender.tx.clone();
        let action = DelayedAction::spawn(after, move || {
            // The session may already be gone.
            let _ = tx.send(firing);
        });

        self.armed.insert(
            key,
            Armed {
                generation,
                _action: action,
            },
        );
        generation
    }

    /// Cancel a pending timer. Returns whether one was armed.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.armed.remove(key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.armed.clear();
    }

    /// Disarm `key` if `generation` is the armed one.
    ///
    /// Returns false for stale firings, which the caller must discard.
    pub fn take_current(&mut self, key: TimerKey, generation: u64) -> bool {
        match self.armed.get(key) {
            Some(armed) if armed.generation == generation => {
                self.armed.remove(key);
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self, key: TimerKey) -> bool {
        self.armed.contains_key(key)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}
