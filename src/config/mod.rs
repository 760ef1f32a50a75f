//! Preferences management
//!
//! Remembers the last-used calculation mode and unit selections between
//! runs. Calculation results are never persisted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calc::{CalcMode, SizeUnit, SpeedUnit, TimeUnit};
use crate::{CalcError, Result, APP_NAME, CONFIG_FILE};

/// Saved form defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Which quantity the calculator solves for
    pub mode: CalcMode,
    /// Unit selector for the file size field
    pub size_unit: SizeUnit,
    /// Unit selector for the link speed field
    pub speed_unit: SpeedUnit,
    /// Unit selector for the transfer time field
    pub time_unit: TimeUnit,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            mode: CalcMode::SolveTime,
            size_unit: SizeUnit::Megabytes,
            speed_unit: SpeedUnit::Mbps,
            time_unit: TimeUnit::Seconds,
        }
    }
}

impl CalcConfig {
    /// Load preferences from the standard config file location
    /// Returns defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Save preferences to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Load preferences from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CalcError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            CalcError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save preferences to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CalcError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CalcError::ConfigError(format!("Failed to serialize preferences: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            CalcError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Standard configuration file path:
    /// `<platform config dir>/xfercalc/xfercalc.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            CalcError::ConfigError("Unable to determine config directory".to_string())
        })?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
