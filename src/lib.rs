//! Library exports for the keybinder shortcut registry.
//!
//! Exposes the spec parser, event model, and registry alongside the config
//! types so that host applications (terminal frontends, window backends,
//! test harnesses) can share parsing and matching logic with the demo binary.

pub mod config;
pub mod error;
pub mod input;
pub mod registry;
pub mod spec;
pub mod target;

pub use config::Config;
pub use error::Error;
pub use input::{InputEvent, Modifiers, PointerButton};
pub use registry::{BindingDoc, BindingKeys, DispatchOutcome, ShortcutRegistry};
pub use target::EventTarget;
