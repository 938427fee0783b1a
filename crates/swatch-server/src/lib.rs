//! Development server for swatch docs.
//!
//! Serves pages rendered on request, runs interactive previews over a
//! WebSocket and reloads connected browsers when content files change.

pub mod live;
pub mod server;
pub mod watcher;

pub use live::{ClientMessage, LiveMessage, ReloadHub};
pub use server::{router, DevServer, DevServerConfig, ServerError, ServerState, LIVE_PATH};
pub use watcher::{FileWatcher, WatchEvent};
