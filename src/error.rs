//! Error types for shortcut parsing and registry setup.

use thiserror::Error;

/// Errors raised by the spec parser and the registry constructor.
///
/// These are the fatal tier: malformed shortcut specs and refused target
/// attachment. Conditions like unbinding a spec that was never registered
/// are surfaced as `log::warn!` instead and never abort an operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The shortcut spec was empty or contained no key tokens.
    #[error("Empty shortcut spec")]
    EmptySpec,

    /// The shortcut spec could not be parsed.
    #[error("Invalid shortcut spec '{spec}': {reason}")]
    InvalidSpec {
        /// The offending spec string as given by the caller
        spec: String,
        /// What made it unparseable
        reason: String,
    },

    /// More than one `+`-part of the spec contained a `|` alternation group.
    #[error("Shortcut spec '{spec}' has more than one alternation group")]
    MultipleAlternations {
        /// The offending spec string as given by the caller
        spec: String,
    },

    /// The event target refused attachment.
    #[error("Failed to attach to event target: {0}")]
    Attach(String),
}
