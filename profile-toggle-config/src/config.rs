//! Config struct, persistence and path resolution.
//!
//! Covers:
//! - `load` / `save` against the XDG-style default path
//! - `load_from` / `save_to` for explicit paths (atomic write)
//! - `validate` for semantic checks after parsing

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{LogLevel, ThemeMode};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Host window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Window title bar text
    #[serde(default = "defaults::window_title")]
    pub window_title: String,

    /// Initial window width in logical pixels
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// egui visuals preset
    #[serde(default)]
    pub theme: ThemeMode,

    /// Debug log verbosity (overridden by `RUST_LOG` and `--log-level`)
    #[serde(default)]
    pub log_level: LogLevel,

    /// Global timeout for fetching remote images
    #[serde(default = "defaults::image_fetch_timeout_secs")]
    pub image_fetch_timeout_secs: u64,

    /// Largest remote image body accepted, in bytes
    #[serde(default = "defaults::image_max_size_bytes")]
    pub image_max_size_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: defaults::window_title(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            theme: ThemeMode::default(),
            log_level: LogLevel::default(),
            image_fetch_timeout_secs: defaults::image_fetch_timeout_secs(),
            image_max_size_bytes: defaults::image_max_size_bytes(),
        }
    }
}

impl Config {
    /// Load configuration from the default path or create it with defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Check semantic constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero (got {}x{})",
                self.window_width, self.window_height
            )));
        }
        if self.image_fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "image_fetch_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.image_max_size_bytes == 0 {
            return Err(ConfigError::Validation(
                "image_max_size_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("profile-toggle")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/profile-toggle/
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("profile-toggle")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
