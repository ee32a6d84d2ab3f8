//! Event target attachment hooks.

use crate::error::Error;

/// The input source a registry attaches to.
///
/// `attach` runs once when the registry is constructed and may refuse the
/// target (wrong surface, listeners unavailable), which fails construction.
/// `detach` runs at most once, from `destroy` or drop, and releases whatever
/// `attach` set up.
///
/// Hosts that drive `dispatch` themselves can construct the registry over
/// `()`, the no-op target.
pub trait EventTarget {
    /// Claims the input source, registering whatever listeners it needs.
    fn attach(&mut self) -> Result<(), Error>;

    /// Releases the input source. Called at most once per registry.
    fn detach(&mut self);
}

impl EventTarget for () {
    fn attach(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn detach(&mut self) {}
}
