//! Configuration file management.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use remind_store::{Store, StoreOptions};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Alternate store file path
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// How many seconds to wait for the store lock before giving up
    #[serde(default)]
    pub lock_wait_secs: Option<u64>,

    /// Ceiling on alert sound playback, in seconds
    #[serde(default)]
    pub max_sound_secs: Option<f32>,

    /// Disable colored output
    #[serde(default)]
    pub no_color: bool,
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("remind")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let path = Self::path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Open the store: explicit flag first, then config, then the
    /// platform default location.
    pub fn open_store(&self, override_path: Option<PathBuf>) -> Result<Store> {
        let path = override_path
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(remind_store::default_store_path);

        let mut options = StoreOptions::default();
        if let Some(secs) = self.lock_wait_secs {
            options.lock_wait = Duration::from_secs(secs);
        }

        Store::with_options(&path, options)
            .with_context(|| format!("Failed to open store: {}", path.display()))
    }

    /// Ceiling on sound playback, with the built-in default applied.
    pub fn sound_ceiling(&self) -> f32 {
        self.max_sound_secs.filter(|s| *s > 0.0).unwrap_or(20.0)
    }
}
