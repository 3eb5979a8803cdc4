//! Anonymization configuration

use crate::domain::{Result, VeilError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Boundary detection tuning
///
/// The keyword sets are fixed; only the heading length limit and the
/// author-section fallback can be tuned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// A paragraph counts as a heading only if its trimmed text is shorter than this
    #[serde(default = "default_max_heading_length")]
    pub max_heading_length: usize,

    /// Author-section end used when no content-start heading is found
    #[serde(default = "default_fallback_author_paragraphs")]
    pub fallback_author_paragraphs: usize,
}

fn default_max_heading_length() -> usize {
    50
}

fn default_fallback_author_paragraphs() -> usize {
    15
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_heading_length: default_max_heading_length(),
            fallback_author_paragraphs: default_fallback_author_paragraphs(),
        }
    }
}

impl DetectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_heading_length == 0 {
            return Err(VeilError::Validation(
                "detection.max_heading_length must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_DETECTION_MAX_HEADING_LENGTH") {
            self.max_heading_length = val.parse().map_err(|_| {
                VeilError::Configuration(format!(
                    "Invalid VEIL_DETECTION_MAX_HEADING_LENGTH value: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("VEIL_DETECTION_FALLBACK_AUTHOR_PARAGRAPHS") {
            self.fallback_author_paragraphs = val.parse().map_err(|_| {
                VeilError::Configuration(format!(
                    "Invalid VEIL_DETECTION_FALLBACK_AUTHOR_PARAGRAPHS value: {val}"
                ))
            })?;
        }

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/veil.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err(VeilError::Validation(
                "audit.log_path must be set when audit logging is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("VEIL_AUDIT_ENABLED") {
            self.enabled = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_AUDIT_ENABLED value: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("VEIL_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("VEIL_AUDIT_JSON_FORMAT") {
            self.json_format = val.parse().map_err(|_| {
                VeilError::Configuration(format!("Invalid VEIL_AUDIT_JSON_FORMAT value: {val}"))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detection_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.max_heading_length, 50);
        assert_eq!(config.fallback_author_paragraphs, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_heading_length_rejected() {
        let config = DetectionConfig {
            max_heading_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_audit_config() {
        let config = AuditConfig::default();
        assert!(!config.enabled);
        assert!(config.json_format);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_audit_requires_path() {
        let config = AuditConfig {
            enabled: true,
            log_path: PathBuf::new(),
            json_format: true,
        };
        assert!(config.validate().is_err());
    }
}
