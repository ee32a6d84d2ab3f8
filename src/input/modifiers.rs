//! Keyboard modifier state.

/// Modifier flags carried by an input event.
///
/// Backends report which of Ctrl, Alt, Shift, and Meta were held when the
/// event fired. The registry turns active flags into pressed tokens in this
/// fixed order: `ctrl`, `alt`, `shift`, `meta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl key held
    pub ctrl: bool,
    /// Alt/Option key held
    pub alt: bool,
    /// Shift key held
    pub shift: bool,
    /// Meta/Super/Cmd key held
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Creates a modifier set with all keys released.
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Ctrl only.
    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    /// Returns true if any modifier is held.
    pub const fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift || self.meta
    }
}
