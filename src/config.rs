// Site configuration options
use crate::tour::Locale;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Locale used until a visitor picks one
    pub default_locale: Locale,
    /// Auto-advance period of the legacy hero slider
    pub hero_interval_ms: u64,
    /// Auto-advance period of the attractions carousel
    pub attractions_interval_ms: u64,
    /// Where the chosen locale is persisted
    pub locale_store_path: PathBuf,
    /// Catalog JSON overriding the bundled tours
    pub catalog_path: Option<PathBuf>,
    /// Translation table JSON overriding the bundled one
    pub translations_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::Es,
            hero_interval_ms: 5000,
            attractions_interval_ms: 7000,
            locale_store_path: PathBuf::from("state/locale.json"),
            catalog_path: None,
            translations_path: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hero_interval_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "hero_interval_ms must be greater than 0".into(),
            ));
        }
        if self.attractions_interval_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "attractions_interval_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    pub fn attractions_interval(&self) -> Duration {
        Duration::from_millis(self.attractions_interval_ms)
    }
}
