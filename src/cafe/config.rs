use crate::error::{CafeError, Result};
use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CAFE_NAME: &str = "Cafe";
const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Configuration for the cafe, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CafeConfig {
    /// Shown in the session banner
    #[serde(default = "default_cafe_name")]
    pub cafe_name: String,

    /// Prefix for every amount printed (e.g. "$", "€")
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Items appended to the house menu at startup
    #[serde(default)]
    pub extra_items: Vec<MenuItem>,
}

fn default_cafe_name() -> String {
    DEFAULT_CAFE_NAME.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            cafe_name: default_cafe_name(),
            currency_symbol: default_currency_symbol(),
            extra_items: Vec::new(),
        }
    }
}

impl CafeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CafeConfig = serde_json::from_str(&content).map_err(|e| {
            CafeError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        tracing::debug!(path = %config_path.display(), extra_items = config.extra_items.len(), "config loaded");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
