//! Configuration file support for keybinder.
//!
//! This module handles loading binding declarations from the configuration
//! file located at `~/.config/keybinder/config.toml`. A config file is a
//! list of `[[binding]]` tables that a host pre-registers into a registry.
//!
//! If no config file exists, an empty configuration is used automatically.

pub mod types;

pub use types::BindingEntry;

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::InputEvent;
use crate::registry::ShortcutRegistry;
use crate::target::EventTarget;

/// Root configuration structure deserialized from the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Declared bindings, in file order
    #[serde(default, rename = "binding")]
    pub bindings: Vec<BindingEntry>,
}

impl Config {
    /// Returns the path to the configuration file,
    /// `~/.config/keybinder/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g. HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("keybinder");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns an empty
    /// configuration if no file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {config:?}");

        Ok(config)
    }

    /// Saves the configuration to the default path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Registers every declared binding into `registry`.
    ///
    /// `make_callback` builds the callback for each entry (a config file
    /// carries no code, only keys and descriptions). Entries with malformed
    /// specs are logged and skipped; one bad entry never blocks the rest.
    pub fn apply_to<T, F, C>(&self, registry: &mut ShortcutRegistry<T>, mut make_callback: F)
    where
        T: EventTarget,
        F: FnMut(&BindingEntry) -> C,
        C: FnMut(&InputEvent) + 'static,
    {
        for entry in &self.bindings {
            let callback = make_callback(entry);
            if let Err(err) =
                registry.bind(&entry.keys, callback, &entry.description, entry.enabled)
            {
                log::warn!("Skipping config binding '{}': {err}", entry.keys);
            }
        }
    }

    /// Returns the JSON schema for the configuration file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
