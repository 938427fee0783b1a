//! Interactive component previews.
//!
//! Every documented example of a component is backed by a [`Preview`]: a
//! small state machine that renders itself to an HTML fragment and reacts to
//! click, input and timer events. The [`PreviewRegistry`] maps component ids
//! to preview factories, and a [`LiveSession`] keeps the instances mounted by
//! one browser alive between events.

pub mod components;
pub mod markup;
pub mod registry;
pub mod session;
pub mod timer;
pub mod traits;

pub use components::CheckState;
pub use registry::{Placeholder, PreviewFactory, PreviewRegistry, RegistryError};
pub use session::{LiveSession, PreviewHost};
pub use timer::{DelayedAction, Firing, FiringSender, TimerSet};
pub use traits::{Effect, Effects, Preview, PreviewEvent, TimerKey};
