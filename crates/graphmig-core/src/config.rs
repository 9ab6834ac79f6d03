//! Configuration schema (graphmig.toml)

use serde::{Deserialize, Serialize};
use crate::version::{Neo4jEdition, Neo4jVersion};

/// Database the statements are rendered for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Release line, e.g. "4.4" or "5"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Neo4jVersion>,

    /// Edition, "community" or "enterprise"
    #[serde(default)]
    pub edition: Neo4jEdition,
}

impl TargetConfig {
    /// Whether both version and edition are known
    pub fn is_complete(&self) -> bool {
        self.version.is_some() && self.edition.is_defined()
    }
}

/// Defaults applied to every render configuration derived from this file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderDefaults {
    /// Emit `IF NOT EXISTS` / `IF EXISTS` guards
    #[serde(default)]
    pub idempotent: bool,

    /// Identify items by their definition rather than their name
    #[serde(default)]
    pub ignore_names: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target database
    #[serde(default)]
    pub target: TargetConfig,

    /// Rendering defaults
    #[serde(default)]
    pub render: RenderDefaults,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
