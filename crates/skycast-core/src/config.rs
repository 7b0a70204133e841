use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use skycast_weather::UnitSystem;

/// User preferences loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location query sent to the weather provider (postcode or city).
    #[serde(default = "default_location")]
    pub location: String,

    /// Unit system for temperature and wind-speed display.
    #[serde(default)]
    pub units: UnitSystem,
}

fn default_location() -> String {
    "94043".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: default_location(),
            units: UnitSystem::Metric,
        }
    }
}

/// Result of config validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get a message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors.join("; ")
    }
}

impl Config {
    /// Load configuration from the platform config dir, writing defaults
    /// on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.location.trim().is_empty() {
            result
                .errors
                .push("location: must not be empty".to_string());
        } else if self.location.len() > 100 {
            result
                .warnings
                .push("location: unusually long (>100 characters)".to_string());
        }

        result
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}
