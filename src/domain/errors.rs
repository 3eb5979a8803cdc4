//! Domain error types
//!
//! This module defines the error hierarchy for Veil. Errors are domain-specific
//! and don't expose third-party types beyond their rendered message.

use thiserror::Error;

/// Main Veil error type
///
/// Library operations return this error. The anonymization orchestrator
/// converts it into a boolean outcome plus a logged diagnostic at its public
/// boundary, so callers of `anonymize_document` never observe it directly.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input document cannot be opened or parsed
    #[error("Failed to load document: {0}")]
    Load(String),

    /// Output document cannot be written
    #[error("Failed to save document: {0}")]
    Save(String),

    /// Name recognizer could not be initialised
    #[error("Name recognizer unavailable: {0}")]
    RecognizerUnavailable(String),

    /// Name recognizer failed while processing text
    #[error("Name recognition failed: {0}")]
    Recognition(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Audit logging errors
    #[error("Audit log error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
