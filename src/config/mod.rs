//! Configuration management for the dari CLI
//!
//! Runtime configuration covers the ambient concerns only (logging level
//! and format). The rule tables (ministry map, keyword table, relevance
//! matrix, field schema) are deliberately NOT configuration: they are
//! immutable statics compiled into the binary, and changing them requires
//! a redeploy, never a runtime mutation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let level = std::env::var("DARI_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        let format = std::env::var("DARI_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        let config = Self {
            logging: LoggingConfig { level, format },
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!("log level must be one of {LEVELS:?}");
        }

        if !["text", "json"].contains(&self.logging.format.as_str()) {
            anyhow::bail!("log format must be text or json");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
