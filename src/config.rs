//! Theme controller configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::theme::ColorMode;

/// Storage key the explicit preference is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";

/// Settings for a [`ThemeController`](crate::ThemeController).
///
/// # Example
///
/// ```rust
/// use portfolio_view::{ColorMode, ThemeConfig};
///
/// let config = ThemeConfig::from_json(r#"{ "storage_key": "site-theme" }"#).unwrap();
/// assert_eq!(config.storage_key, "site-theme");
/// assert_eq!(config.fallback, ColorMode::Light);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Mode used when neither an explicit nor an ambient preference exists.
    pub fallback: ColorMode,
}

impl ThemeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fallback: ColorMode::Light,
        }
    }
}

/// Error returned when loading a [`ThemeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme config storage_key must not be empty")]
    EmptyStorageKey,
}
