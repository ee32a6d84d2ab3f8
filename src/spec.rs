//! Shortcut spec parsing.
//!
//! A spec string like `"ctrl+s"` or `"ctrl+c|v"` describes one or more
//! key/click combinations. Parsing lower-cases the string, splits it on `+`,
//! resolves aliases (`esc` → `escape`, `control` → `ctrl`, ...), and expands
//! a single `|` alternation group into one key sequence per alternative,
//! all sharing the non-alternation parts as a common prefix.

use crate::error::Error;

/// Resolves a spec token against the static alias table.
///
/// Unknown tokens pass through unchanged. `space` maps to a literal space so
/// that it lines up with the key identifier a space press reports.
pub fn resolve_alias(token: &str) -> &str {
    match token {
        "esc" => "escape",
        "del" => "delete",
        "ins" => "insert",
        "return" => "enter",
        "space" => " ",
        "control" => "ctrl",
        "option" => "alt",
        "cmd" | "command" | "super" | "win" => "meta",
        other => other,
    }
}

/// Returns true if the token names one of the four modifier flags.
pub fn is_modifier_token(token: &str) -> bool {
    matches!(token, "ctrl" | "alt" | "shift" | "meta")
}

/// Sorts a token list and joins it with `+`.
///
/// This is the order-insensitive form used for matching: a binding parsed
/// from `"s+ctrl"` and a pressed set built as `[ctrl, s]` canonicalize to
/// the same string.
pub fn canonical_join(tokens: &[String]) -> String {
    let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join("+")
}

/// One expansion of a shortcut spec: an ordered list of normalized tokens.
///
/// Token order is the parse order, not sorted; it is the binding's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySequence(Vec<String>);

impl KeySequence {
    /// The normalized tokens in parse order.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Parse-order `+`-join. Two specs that join identically are the same
    /// registration as far as the registry is concerned.
    pub fn join(&self) -> String {
        self.0.join("+")
    }

    /// Sorted `+`-join used for order-insensitive matching.
    pub fn canonical(&self) -> String {
        canonical_join(&self.0)
    }

    /// Human-readable `" + "`-join for docs output.
    pub fn readable(&self) -> String {
        self.0.join(" + ")
    }
}

/// Parses a shortcut spec into its expansions.
///
/// Returns one `KeySequence` per alternative of the (at most one)
/// alternation group, or a single sequence when no group is present.
/// Blank parts and blank alternatives are skipped; a spec that yields no
/// tokens or no alternatives fails.
///
/// # Examples
///
/// ```
/// use keybinder::spec::parse_spec;
///
/// let seqs = parse_spec("ctrl+c|v").unwrap();
/// assert_eq!(seqs.len(), 2);
/// assert_eq!(seqs[0].join(), "ctrl+c");
/// assert_eq!(seqs[1].join(), "ctrl+v");
/// ```
pub fn parse_spec(spec: &str) -> Result<Vec<KeySequence>, Error> {
    if spec.trim().is_empty() {
        return Err(Error::EmptySpec);
    }

    let lowered = spec.to_lowercase();

    let mut prefix: Vec<String> = Vec::new();
    let mut alternatives: Option<Vec<String>> = None;

    for part in lowered.split('+') {
        let part = part.trim();

        if part.contains('|') {
            if alternatives.is_some() {
                return Err(Error::MultipleAlternations {
                    spec: spec.to_string(),
                });
            }

            let alts: Vec<String> = part
                .split('|')
                .map(str::trim)
                .filter(|alt| !alt.is_empty())
                .map(|alt| resolve_alias(alt).to_string())
                .collect();

            if alts.is_empty() {
                return Err(Error::InvalidSpec {
                    spec: spec.to_string(),
                    reason: "alternation group has no usable alternatives".to_string(),
                });
            }

            alternatives = Some(alts);
        } else if !part.is_empty() {
            prefix.push(resolve_alias(part).to_string());
        }
    }

    match alternatives {
        Some(alts) => Ok(alts
            .into_iter()
            .map(|alt| {
                let mut tokens = prefix.clone();
                tokens.push(alt);
                KeySequence(tokens)
            })
            .collect()),
        None => {
            if prefix.is_empty() {
                return Err(Error::InvalidSpec {
                    spec: spec.to_string(),
                    reason: "no key tokens".to_string(),
                });
            }
            Ok(vec![KeySequence(prefix)])
        }
    }
}
