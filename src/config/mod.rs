// SPDX-License-Identifier: MPL-2.0
//! This module handles the configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[notifications]` - Category policy, keyboard dismissal, toast width,
//!   extra categories
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()`
//! 3. Set the `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::{CategoryRegistry, CategoryStyle, UnknownCategoryPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Notification behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// What to do with a category missing from the registry.
    #[serde(default)]
    pub unknown_category: UnknownCategoryPolicy,

    /// Whether Escape dismisses the oldest open toast.
    #[serde(
        default = "default_dismiss_on_escape",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_escape: Option<bool>,

    /// Toast width in logical pixels.
    #[serde(default = "default_toast_width", skip_serializing_if = "Option::is_none")]
    pub toast_width: Option<f32>,

    /// Categories added to (or overriding) the built-in ones.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, CategoryStyle>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            unknown_category: UnknownCategoryPolicy::default(),
            dismiss_on_escape: default_dismiss_on_escape(),
            toast_width: default_toast_width(),
            categories: BTreeMap::new(),
        }
    }
}

impl NotificationsConfig {
    /// Built-in categories extended with the configured ones.
    #[must_use]
    pub fn registry(&self) -> CategoryRegistry {
        let mut registry = CategoryRegistry::builtin().with_policy(self.unknown_category);
        for (name, style) in &self.categories {
            registry.register(name.clone(), style.clone());
        }
        registry
    }

    #[must_use]
    pub fn dismiss_on_escape(&self) -> bool {
        self.dismiss_on_escape.unwrap_or(DEFAULT_DISMISS_ON_ESCAPE)
    }

    /// Toast width, clamped so persisted configs cannot request nonsense.
    #[must_use]
    pub fn toast_width(&self) -> f32 {
        self.toast_width
            .unwrap_or(DEFAULT_TOAST_WIDTH)
            .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_dismiss_on_escape() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_ESCAPE)
}

fn default_toast_width() -> Option<f32> {
    Some(DEFAULT_TOAST_WIDTH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then env var, then platform default.
#[must_use]
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to load config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
