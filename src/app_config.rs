use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::converter::OutputKind;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language code used when naming converted caption files
    #[serde(default = "default_language")]
    pub language: String,

    /// Default output format when none is requested
    #[serde(default)]
    pub format: OutputKind,

    /// Conversion cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the converted-file cache
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    /// Directory converted files are written into by default
    #[serde(default = "default_cache_dir")]
    pub directory: String,

    /// Hours to keep converted files before cleanup removes them
    #[serde(default = "default_retention_hours")]
    pub retention_hours: u64,

    /// Maximum converted files to keep in the cache
    #[serde(default = "default_max_cached_files")]
    pub max_cached_files: usize,

    /// Whether cleanup runs automatically after each conversion
    #[serde(default = "default_true")]
    pub auto_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            directory: default_cache_dir(),
            retention_hours: default_retention_hours(),
            max_cached_files: default_max_cached_files(),
            auto_cleanup: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_cache_dir() -> String {
    "subtitle_cache".to_string()
}

fn default_retention_hours() -> u64 {
    24
}

fn default_max_cached_files() -> usize {
    100
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("Language code must not be empty"));
        }

        if self.cache.directory.trim().is_empty() {
            return Err(anyhow!("Cache directory must not be empty"));
        }

        if self.cache.retention_hours == 0 {
            return Err(anyhow!("Cache retention must be at least one hour"));
        }

        if self.cache.max_cached_files == 0 {
            return Err(anyhow!("Cache must allow at least one file"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            format: OutputKind::default(),
            cache: CacheConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
