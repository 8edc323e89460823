//! # Configuration
//!
//! Optional YAML file at `<config dir>/budgetbook/config.yaml`:
//!
//! ```yaml
//! data_directory: "/home/me/budget-data"   # defaults to <data dir>/budgetbook
//! window_width: 900.0
//! window_height: 700.0
//! ```
//!
//! A missing file means defaults. A file that cannot be parsed is an error.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIRECTORY: &str = "budgetbook";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the key/value files live; None means the platform default
    pub data_directory: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: None,
            window_width: 900.0,
            window_height: 700.0,
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory
    pub fn load() -> Result<Self> {
        match dirs::config_dir() {
            Some(config_dir) => Self::load_from(&config_dir.join(APP_DIRECTORY).join(CONFIG_FILE)),
            None => {
                info!("No platform config directory, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit file path, using defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Directory the file storage should use
    pub fn resolved_data_directory(&self) -> PathBuf {
        if let Some(dir) = &self.data_directory {
            return dir.clone();
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_DIRECTORY))
            .unwrap_or_else(|| PathBuf::from("budgetbook_data"))
    }
}
