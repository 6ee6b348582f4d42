//! # Configuration
//!
//! Search parameters for the safe location finder, loadable from JSON, and the error
//! type shared by everything that reads configuration or scenario files.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

/// Layers searched above and below the start when no height radius is given.
pub const DEFAULT_HEIGHT_RADIUS: u32 = 3;
/// Rings searched around each layer's center when no ring radius is given.
pub const DEFAULT_RING_RADIUS: u32 = 9;
/// Blocks remembered per search. Zero disables the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Parameters of a safe location search.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Layers searched above and below the starting layer.
    pub height_radius: u32,
    /// Largest ring radius searched around each layer's center.
    pub ring_radius: u32,
    /// Capacity of the per-search block cache.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            height_radius: DEFAULT_HEIGHT_RADIUS,
            ring_radius: DEFAULT_RING_RADIUS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl SearchConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// Failure to read or interpret a configuration or scenario.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The text is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// The values parsed but cannot be used.
    Invalid {
        /// What is wrong with the values.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(error) => write!(f, "failed to read file: {}", error),
            ConfigError::Parse(error) => write!(f, "failed to parse json: {}", error),
            ConfigError::Invalid { reason } => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(error) => Some(error),
            ConfigError::Parse(error) => Some(error),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error)
    }
}
