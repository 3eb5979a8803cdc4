//! Configuration schema types
//!
//! This module defines the configuration structure for Veil. Every section
//! has defaults, so an empty file (or no file at all) is a valid configuration.

use crate::anonymization::config::{AuditConfig, DetectionConfig};
use serde::{Deserialize, Serialize};

/// Main Veil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VeilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Boundary detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Name recognizer settings
    #[serde(default)]
    pub recognizer: RecognizerConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VeilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.detection.validate().map_err(|e| e.to_string())?;
        self.recognizer.validate()?;
        self.audit.validate().map_err(|e| e.to_string())?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (detect and report, don't write output)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Name recognizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Recognizer implementation
    #[serde(default = "default_recognizer_kind")]
    pub kind: String,

    /// Longest capitalised word run still treated as a whole name; longer
    /// runs only yield their trailing name
    #[serde(default = "default_max_name_tokens")]
    pub max_name_tokens: usize,

    /// Additional words that never belong to a name
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            kind: default_recognizer_kind(),
            max_name_tokens: default_max_name_tokens(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl RecognizerConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_kinds = ["heuristic"];
        if !valid_kinds.contains(&self.kind.as_str()) {
            return Err(format!(
                "Invalid recognizer.kind '{}'. Must be one of: {}",
                self.kind,
                valid_kinds.join(", ")
            ));
        }

        if self.max_name_tokens < 2 {
            return Err("recognizer.max_name_tokens must be >= 2".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must be set when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_recognizer_kind() -> String {
    "heuristic".to_string()
}

fn default_max_name_tokens() -> usize {
    4
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
