//! Shortcut registry: binding storage, matching, and dispatch.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::error::Error;
use crate::input::InputEvent;
use crate::spec::{KeySequence, canonical_join, parse_spec};
use crate::target::EventTarget;

/// Shared callback handle. One `bind` call may expand to several bindings
/// (alternation groups); they all invoke the same callback.
type Callback = Rc<RefCell<dyn FnMut(&InputEvent)>>;

struct Binding {
    keys: KeySequence,
    /// Parse-order join; the binding's identity.
    join: String,
    /// Sorted join; the match key.
    canonical: String,
    callback: Callback,
    description: String,
    enabled: bool,
}

/// What `dispatch` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A callback fired; the host should suppress the event's default action.
    Matched,
    /// The event qualified but no enabled binding matched.
    Unmatched,
    /// The event does not qualify for matching, or the registry is destroyed.
    Ignored,
}

/// Snapshot of one binding for introspection. Callbacks are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingDoc {
    /// The binding's keys, raw or readable depending on the `docs` call
    pub keys: BindingKeys,
    /// The description given at bind time
    pub description: String,
}

/// Key representation inside a [`BindingDoc`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BindingKeys {
    /// Raw ordered token sequence (`docs(false)`)
    Tokens(Vec<String>),
    /// `" + "`-joined string form (`docs(true)`)
    Readable(String),
}

impl fmt::Display for BindingKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokens(tokens) => write!(f, "{}", tokens.join("+")),
            Self::Readable(joined) => write!(f, "{joined}"),
        }
    }
}

/// Maps shortcut specs to callbacks for one event target.
///
/// Bindings are matched in registration order; the first enabled binding
/// whose canonical key set equals the canonical pressed set fires, and at
/// most one callback fires per event. All operations are synchronous and
/// run on the caller's thread.
///
/// Each registry owns its own binding list and target, so independent
/// registries can coexist against different targets.
pub struct ShortcutRegistry<T: EventTarget = ()> {
    target: T,
    bindings: Vec<Binding>,
    /// Parse-order joins of all live bindings, for duplicate rejection.
    joins: HashSet<String>,
    debug: bool,
    destroyed: bool,
}

impl ShortcutRegistry<()> {
    /// Creates a registry without an attached input source. The host feeds
    /// events in through [`dispatch`](Self::dispatch) itself.
    pub fn detached() -> Self {
        // () always attaches.
        Self::new(()).unwrap_or_else(|_| unreachable!())
    }
}

impl<T: EventTarget> ShortcutRegistry<T> {
    /// Creates a registry attached to `target`.
    ///
    /// # Errors
    /// Fails if the target refuses attachment.
    pub fn new(mut target: T) -> Result<Self, Error> {
        target.attach()?;
        Ok(Self {
            target,
            bindings: Vec::new(),
            joins: HashSet::new(),
            debug: false,
            destroyed: false,
        })
    }

    /// Registers `callback` under every expansion of `spec`.
    ///
    /// Expansions are independent: an expansion whose join is already bound
    /// is skipped with a warning while the others still register.
    ///
    /// # Errors
    /// Fails only on a malformed spec; duplicate bindings are not an error.
    pub fn bind(
        &mut self,
        spec: &str,
        callback: impl FnMut(&InputEvent) + 'static,
        description: &str,
        enabled: bool,
    ) -> Result<(), Error> {
        let sequences = parse_spec(spec)?;
        let callback: Callback = Rc::new(RefCell::new(callback));

        for keys in sequences {
            let join = keys.join();
            if !self.joins.insert(join.clone()) {
                log::warn!("Shortcut '{join}' is already bound; ignoring this expansion");
                continue;
            }
            let canonical = keys.canonical();
            self.bindings.push(Binding {
                keys,
                join,
                canonical,
                callback: Rc::clone(&callback),
                description: description.to_string(),
                enabled,
            });
        }

        Ok(())
    }

    /// Removes every binding matching an expansion of `spec`.
    ///
    /// # Errors
    /// Fails only on a malformed spec; unbinding a spec that is not bound
    /// logs a warning per missing expansion.
    pub fn unbind(&mut self, spec: &str) -> Result<(), Error> {
        for keys in parse_spec(spec)? {
            let join = keys.join();
            match self.bindings.iter().position(|b| b.join == join) {
                Some(index) => {
                    self.bindings.remove(index);
                    self.joins.remove(&join);
                }
                None => log::warn!("Shortcut '{join}' is not bound; nothing to unbind"),
            }
        }
        Ok(())
    }

    /// Replaces the callback, description, and enabled flag of every
    /// existing binding matching an expansion of `spec`.
    ///
    /// The binding keeps its registration position, so its match priority is
    /// unchanged. Expansions that are not currently bound log a warning;
    /// rebind never creates bindings.
    ///
    /// # Errors
    /// Fails only on a malformed spec.
    pub fn rebind(
        &mut self,
        spec: &str,
        callback: impl FnMut(&InputEvent) + 'static,
        description: &str,
        enabled: bool,
    ) -> Result<(), Error> {
        let sequences = parse_spec(spec)?;
        let callback: Callback = Rc::new(RefCell::new(callback));

        for keys in sequences {
            let join = keys.join();
            match self.bindings.iter_mut().find(|b| b.join == join) {
                Some(binding) => {
                    binding.callback = Rc::clone(&callback);
                    binding.description = description.to_string();
                    binding.enabled = enabled;
                }
                None => log::warn!("Shortcut '{join}' is not bound; rebind skipped"),
            }
        }

        Ok(())
    }

    /// Enables every binding matching an expansion of `spec`.
    ///
    /// # Errors
    /// Fails only on a malformed spec.
    pub fn enable(&mut self, spec: &str) -> Result<(), Error> {
        self.set_enabled(spec, true)
    }

    /// Disables every binding matching an expansion of `spec`. Disabled
    /// bindings keep their position and description.
    ///
    /// # Errors
    /// Fails only on a malformed spec.
    pub fn disable(&mut self, spec: &str) -> Result<(), Error> {
        self.set_enabled(spec, false)
    }

    fn set_enabled(&mut self, spec: &str, enabled: bool) -> Result<(), Error> {
        for keys in parse_spec(spec)? {
            let join = keys.join();
            match self.bindings.iter_mut().find(|b| b.join == join) {
                Some(binding) => binding.enabled = enabled,
                None => log::warn!(
                    "Shortcut '{join}' is not bound; cannot {}",
                    if enabled { "enable" } else { "disable" }
                ),
            }
        }
        Ok(())
    }

    /// Toggles the pressed-token echo emitted on every qualifying event.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Returns a snapshot of all bindings in registration order.
    ///
    /// With `readable` set, keys are the `" + "`-joined string form;
    /// otherwise the raw ordered token sequence.
    pub fn docs(&self, readable: bool) -> Vec<BindingDoc> {
        self.bindings
            .iter()
            .map(|binding| BindingDoc {
                keys: if readable {
                    BindingKeys::Readable(binding.keys.readable())
                } else {
                    BindingKeys::Tokens(binding.keys.tokens().to_vec())
                },
                description: binding.description.clone(),
            })
            .collect()
    }

    /// Matches `event` against the registry.
    ///
    /// The event is normalized to its pressed-token set; the first enabled
    /// binding with an equal canonical form fires with the original event.
    /// When the debug echo is on, the push-order tokens are also logged,
    /// match or no match.
    pub fn dispatch(&mut self, event: &InputEvent) -> DispatchOutcome {
        if self.destroyed {
            return DispatchOutcome::Ignored;
        }

        let Some(tokens) = event.pressed_tokens() else {
            return DispatchOutcome::Ignored;
        };

        if self.debug {
            log::info!("pressed: {}", tokens.join(" "));
        } else {
            log::debug!("pressed: {}", tokens.join(" "));
        }

        let canonical = canonical_join(&tokens);
        for binding in &mut self.bindings {
            if binding.enabled && binding.canonical == canonical {
                let callback = &mut *binding.callback.borrow_mut();
                callback(event);
                return DispatchOutcome::Matched;
            }
        }

        DispatchOutcome::Unmatched
    }

    /// Detaches from the target and drops all bindings.
    ///
    /// Safe to call more than once; the second call is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.target.detach();
        self.bindings.clear();
        self.joins.clear();
    }
}

impl<T: EventTarget> Drop for ShortcutRegistry<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}
