//! Configuration data types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One binding entry from the config file.
///
/// # Example TOML
/// ```toml
/// [[binding]]
/// keys = "ctrl+s"
/// description = "Save the current document"
///
/// [[binding]]
/// keys = "ctrl+c|v"
/// description = "Clipboard"
/// enabled = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BindingEntry {
    /// Shortcut spec string (`"ctrl+s"`, `"ctrl+c|v"`, `"ctrl+click"`)
    pub keys: String,

    /// Human-readable description shown in docs output
    #[serde(default)]
    pub description: String,

    /// Whether the binding starts enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}
