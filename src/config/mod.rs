//! Configuration file support for deskcalc.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/deskcalc/config.toml`. Settings
//! cover result formatting and interactive session preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DisplayConfig, ReplConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified in
/// the config file.
///
/// # Example TOML
/// ```toml
/// [display]
/// group_separator = ","
/// show_expression = true
///
/// [repl]
/// prompt = "> "
/// show_banner = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Result formatting preferences
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interactive session preferences
    #[serde(default)]
    pub repl: ReplConfig,
}

impl Config {
    /// Validates configuration values, falling back where they would
    /// corrupt the display.
    ///
    /// The group separator must not be a character that can occur inside
    /// an operand (a digit, the decimal point, or a leading minus), and
    /// the prompt is capped at 32 characters.
    fn validate_and_clamp(&mut self) {
        let separator = self.display.group_separator;
        if separator.is_ascii_digit() || separator == '.' || separator == '-' {
            log::warn!("Invalid group_separator {separator:?}, falling back to ','");
            self.display.group_separator = ',';
        }

        if self.repl.prompt.chars().count() > 32 {
            log::warn!("Prompt longer than 32 characters, truncating");
            self.repl.prompt = self.repl.prompt.chars().take(32).collect();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/deskcalc/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("deskcalc");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable values.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}
