//! Live preview protocol over WebSocket.
//!
//! Each connection owns one [`LiveSession`]. The browser mounts the previews
//! it shows, forwards clicks and input, and receives re-rendered HTML for
//! both its own events and timer expiries. Content reloads are broadcast to
//! every connection through the [`ReloadHub`].

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use swatch_preview::{LiveSession, PreviewEvent, PreviewRegistry};

/// Messages sent by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Create (or replace) a preview instance
    Mount {
        instance: String,
        component: String,
        #[serde(default)]
        variant: usize,
    },

    /// Drop a preview instance and its timers
    Unmount { instance: String },

    /// A click on an element with `data-action`
    Action {
        instance: String,
        action: String,
        #[serde(default)]
        value: Option<String>,
    },

    /// A value change on an element with `data-input`
    Input {
        instance: String,
        name: String,
        value: String,
    },
}

/// Messages sent to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveMessage {
    /// Connection established
    Connected,

    /// New markup for one preview instance
    Render { instance: String, html: String },

    /// Content changed; reload the page
    Reload,
}

/// Hub for broadcasting messages to all connected clients.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<LiveMessage>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: LiveMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LiveMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one client message to the session.
///
/// Returns the reply to send, if any. Events for unknown instances are
/// dropped.
pub fn apply(session: &mut LiveSession, message: ClientMessage) -> Option<LiveMessage> {
    match message {
        ClientMessage::Mount {
            instance,
            component,
            variant,
        } => {
            let html = session.mount(&instance, &component, variant);
            Some(LiveMessage::Render { instance, html })
        }
        ClientMessage::Unmount { instance } => {
            session.unmount(&instance);
            None
        }
        ClientMessage::Action {
            instance,
            action,
            value,
        } => {
            let event = match value {
                Some(value) => PreviewEvent::action_with(action, value),
                None => PreviewEvent::action(action),
            };
            render(session, instance, &event)
        }
        ClientMessage::Input {
            instance,
            name,
            value,
        } => render(session, instance, &PreviewEvent::input(name, value)),
    }
}

fn render(session: &mut LiveSession, instance: String, event: &PreviewEvent) -> Option<LiveMessage> {
    match session.dispatch(&instance, event) {
        Some(html) => Some(LiveMessage::Render { instance, html }),
        None => {
            tracing::debug!("Event for unknown preview {}", instance);
            None
        }
    }
}

async fn send(socket: &mut WebSocket, msg: &LiveMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

/// Translate a reload broadcast into a message for the client.
///
/// A closed hub never yields again, so `open` is cleared to stop polling it.
fn reload_notice(
    notice: Result<LiveMessage, broadcast::error::RecvError>,
    open: &mut bool,
) -> Option<LiveMessage> {
    match notice {
        Ok(message) => Some(message),
        Err(broadcast::error::RecvError::Lagged(_)) => Some(LiveMessage::Reload),
        Err(broadcast::error::RecvError::Closed) => {
            *open = false;
            None
        }
    }
}

/// Drive one WebSocket connection until the client goes away.
pub async fn run_connection(
    mut socket: WebSocket,
    registry: Arc<PreviewRegistry>,
    mut reloads: broadcast::Receiver<LiveMessage>,
) {
    let mut session = LiveSession::new(registry);

    if send(&mut socket, &LiveMessage::Connected).await.is_err() {
        return;
    }

    let mut reloads_open = true;

    loop {
        let reply = tokio::select! {
            incoming = socket.recv() => {
                let Some(Ok(message)) = incoming else {
                    break;
                };
                match message {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                        Ok(message) => apply(&mut session, message),
                        Err(e) => {
                            tracing::debug!("Ignoring malformed live message: {}", e);
                            None
                        }
                    },
                    Message::Close(_) => break,
                    _ => None,
                }
            }
            Some(firing) = session.next_firing() => {
                session
                    .fire(firing)
                    .map(|(instance, html)| LiveMessage::Render { instance, html })
            }
            notice = reloads.recv(), if reloads_open => reload_notice(notice, &mut reloads_open),
        };

        if let Some(reply) = reply {
            if send(&mut socket, &reply).await.is_err() {
                break;
            }
        }
    }

    tracing::debug!("Live session closed with {} previews", session.len());
}
