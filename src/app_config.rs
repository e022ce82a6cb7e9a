use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the optional JSON configuration: loading,
/// validating and applying command line overrides.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Frame rate to align with instead of the PGO header value
    #[serde(default)]
    pub fps_override: Option<u32>,

    /// Run layout validation on the aligned document
    #[serde(default = "default_validate_output")]
    pub validate_output: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_validate_output() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AppError> {
        if self.fps_override == Some(0) {
            return Err(AppError::Config(
                "fps_override must be a positive frame rate".to_string(),
            ));
        }
        Ok(())
    }

    /// Frame rate to align with, given the document's own value
    pub fn effective_fps(&self, document_fps: i64) -> i64 {
        self.fps_override.map_or(document_fps, i64::from)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            fps_override: None,
            validate_output: default_validate_output(),
        }
    }
}
