//! xfercalc - Transfer Time Calculator
//!
//! A terminal calculator for the relationship between file size, link
//! speed, and transfer time, with bidirectional unit conversion.

use std::fmt;

// Public re-exports
pub mod app;
pub mod calc;
pub mod config;
pub mod simple;

// Common error types
#[derive(Debug)]
pub enum CalcError {
    /// I/O failure while driving the terminal or reading input
    IoError(std::io::Error),
    /// Unit tag not recognized by the normalizer
    InvalidUnit(String),
    /// Missing, non-numeric, or non-positive input
    InvalidInput(String),
    /// Preferences loading or saving error
    ConfigError(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::IoError(err) => write!(f, "I/O error: {}", err),
            CalcError::InvalidUnit(unit) => write!(f, "Unknown unit: {}", unit),
            CalcError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CalcError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        CalcError::IoError(err)
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CalcError {
    fn from(err: toml::ser::Error) -> Self {
        CalcError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for xfercalc operations
pub type Result<T> = std::result::Result<T, CalcError>;

// Common constants
pub const APP_NAME: &str = "xfercalc";
pub const CONFIG_FILE: &str = "xfercalc.toml";
