//! Configuration module for Chart-Embed
//!
//! Provides the persisted embed settings, their TOML loading surface, and
//! the embed-readiness validator.

mod settings;
mod validator;

pub use settings::{load_settings, EmbedSettings, SettingsLoader};
pub use validator::{validate_settings, EmbedValidator, TOTAL_CONFIG_FIELDS};

// Configuration-related error type
pub use settings::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
