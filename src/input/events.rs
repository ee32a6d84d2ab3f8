//! Generic input event types and pressed-token normalization.

use crate::spec::{is_modifier_token, resolve_alias};

use super::modifiers::Modifiers;

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (the only one the registry matches)
    Primary,
    /// Secondary/context button
    Secondary,
    /// Middle button
    Middle,
}

/// A single input event delivered by the host backend.
///
/// Key identifiers are whatever the backend reports for the primary key
/// (`"s"`, `"Escape"`, `" "`); normalization lower-cases them, so casing
/// does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press.
    Key {
        /// Primary key identifier as reported by the backend
        key: String,
        /// Modifier flags active at press time
        modifiers: Modifiers,
    },
    /// A pointer button click.
    Pointer {
        /// Which button was clicked
        button: PointerButton,
        /// Modifier flags active at click time
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// Convenience constructor for a key press.
    pub fn key(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self::Key {
            key: key.into(),
            modifiers,
        }
    }

    /// Convenience constructor for a primary-button click.
    pub fn click(modifiers: Modifiers) -> Self {
        Self::Pointer {
            button: PointerButton::Primary,
            modifiers,
        }
    }

    /// Normalizes the event into its pressed-token list.
    ///
    /// Active modifier flags are pushed first in the fixed `ctrl`, `alt`,
    /// `shift`, `meta` order, then `click` for a primary-button click or the
    /// lower-cased key identifier for a key press. A key that resolves to a
    /// modifier name is not pushed again; the flag already covers it.
    ///
    /// Returns `None` for events the registry ignores entirely (non-primary
    /// pointer buttons).
    pub fn pressed_tokens(&self) -> Option<Vec<String>> {
        let (modifiers, key) = match self {
            Self::Key { key, modifiers } => (modifiers, Some(key)),
            Self::Pointer {
                button: PointerButton::Primary,
                modifiers,
            } => (modifiers, None),
            Self::Pointer { .. } => return None,
        };

        let mut tokens = Vec::new();
        if modifiers.ctrl {
            tokens.push("ctrl".to_string());
        }
        if modifiers.alt {
            tokens.push("alt".to_string());
        }
        if modifiers.shift {
            tokens.push("shift".to_string());
        }
        if modifiers.meta {
            tokens.push("meta".to_string());
        }

        match key {
            None => tokens.push("click".to_string()),
            Some(key) => {
                let lowered = key.to_lowercase();
                let resolved = resolve_alias(&lowered);
                if !is_modifier_token(resolved) {
                    tokens.push(resolved.to_string());
                }
            }
        }

        Some(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_normalizes_to_single_token() {
        let event = InputEvent::key("s", Modifiers::new());
        assert_eq!(event.pressed_tokens().unwrap(), ["s"]);
    }

    #[test]
    fn key_identifier_is_lowercased() {
        let event = InputEvent::key("Escape", Modifiers::new());
        assert_eq!(event.pressed_tokens().unwrap(), ["escape"]);
    }

    #[test]
    fn modifier_flags_push_in_fixed_order() {
        let event = InputEvent::key(
            "s",
            Modifiers {
                ctrl: true,
                alt: false,
                shift: true,
                meta: true,
            },
        );
        assert_eq!(event.pressed_tokens().unwrap(), ["ctrl", "shift", "meta", "s"]);
    }

    #[test]
    fn primary_click_normalizes_to_click_token() {
        let event = InputEvent::click(Modifiers::ctrl());
        assert_eq!(event.pressed_tokens().unwrap(), ["ctrl", "click"]);
    }

    #[test]
    fn non_primary_clicks_are_ignored() {
        let event = InputEvent::Pointer {
            button: PointerButton::Secondary,
            modifiers: Modifiers::new(),
        };
        assert_eq!(event.pressed_tokens(), None);

        let event = InputEvent::Pointer {
            button: PointerButton::Middle,
            modifiers: Modifiers::ctrl(),
        };
        assert_eq!(event.pressed_tokens(), None);
    }

    #[test]
    fn bare_modifier_press_is_not_double_counted() {
        // Pressing Ctrl itself reports key "control" with the flag set; the
        // token list must contain "ctrl" once.
        let event = InputEvent::key("Control", Modifiers::ctrl());
        assert_eq!(event.pressed_tokens().unwrap(), ["ctrl"]);
    }

    #[test]
    fn space_key_stays_a_space() {
        let event = InputEvent::key(" ", Modifiers::new());
        assert_eq!(event.pressed_tokens().unwrap(), [" "]);
    }
}
