//! Configuration module for the community backend.

use serde::Deserialize;
use std::path::Path;

use crate::{CommunityError, Result};

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/community.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/community.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Community content limits.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityConfig {
    /// Name of the community.
    #[serde(default = "default_community_name")]
    pub name: String,
    /// Maximum post title length (in characters).
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    /// Maximum post content length (in characters).
    #[serde(default = "default_max_content_length")]
    pub max_content_length: usize,
    /// Maximum comment length (in characters).
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
}

fn default_community_name() -> String {
    "Community".to_string()
}

fn default_max_title_length() -> usize {
    100
}

fn default_max_content_length() -> usize {
    10_000
}

fn default_max_comment_length() -> usize {
    1_000
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            name: default_community_name(),
            max_title_length: default_max_title_length(),
            max_content_length: default_max_content_length(),
            max_comment_length: default_max_comment_length(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Content limits.
    #[serde(default)]
    pub community: CommunityConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(CommunityError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)
            .map_err(|e| CommunityError::Config(format!("config parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Every content limit must be at least one character.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_title_length", self.community.max_title_length),
            ("max_content_length", self.community.max_content_length),
            ("max_comment_length", self.community.max_comment_length),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(CommunityError::Config(format!(
                    "community.{name} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}
