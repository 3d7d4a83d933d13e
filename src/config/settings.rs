//! Embed settings persistence for Chart-Embed
//!
//! Stands in for the hosting page's persisted property bag: four free-text
//! fields, loaded from a TOML file and saved back to it. Fields left
//! unconfigured deserialize as empty strings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Raw embed configuration as entered by the administrator
///
/// Values are persisted and mutated only through the settings surface;
/// validation never touches them. All four fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedSettings {
    /// Compound `tenantName.region` identifier
    #[serde(default)]
    pub tenant: String,

    /// OAuth client identifier issued for the embed
    #[serde(default)]
    pub client_id: String,

    /// Application identifier, expected UUID v4 shape
    #[serde(default)]
    pub app_id: String,

    /// Opaque visualization/object identifier
    #[serde(default)]
    pub object_id: String,
}

impl EmbedSettings {
    /// Creates settings from the four raw field values
    pub fn new(
        tenant: impl Into<String>,
        client_id: impl Into<String>,
        app_id: impl Into<String>,
        object_id: impl Into<String>,
    ) -> Self {
        EmbedSettings {
            tenant: tenant.into(),
            client_id: client_id.into(),
            app_id: app_id.into(),
            object_id: object_id.into(),
        }
    }

    /// Checks whether every field is still untouched
    pub fn is_untouched(&self) -> bool {
        self.tenant.is_empty()
            && self.client_id.is_empty()
            && self.app_id.is_empty()
            && self.object_id.is_empty()
    }
}

/// Settings loader bound to a file path
pub struct SettingsLoader {
    settings_path: PathBuf,
}

impl SettingsLoader {
    /// Creates a new settings loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SettingsLoader {
            settings_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads settings from file
    pub fn load(&self) -> Result<EmbedSettings, ConfigError> {
        if !self.settings_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.settings_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.settings_path)?;
        let settings: EmbedSettings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Loads settings or returns the untouched defaults if the file is
    /// missing or unreadable
    pub fn load_or_default(&self) -> EmbedSettings {
        self.load().unwrap_or_default()
    }

    /// Saves settings to file
    pub fn save(&self, settings: &EmbedSettings) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(settings)?;
        fs::write(&self.settings_path, contents)?;
        Ok(())
    }
}

/// Loads settings from the default location
pub fn load_settings() -> EmbedSettings {
    SettingsLoader::new("embed.toml").load_or_default()
}
