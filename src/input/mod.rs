//! Generic input event model.
//!
//! This module defines the backend-neutral event types the registry matches
//! against. Host backends map their native key and pointer events to these
//! generic values before handing them to `ShortcutRegistry::dispatch`.

pub mod events;
pub mod modifiers;

pub use events::{InputEvent, PointerButton};
pub use modifiers::Modifiers;
