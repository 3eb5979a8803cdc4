//! Audit logger for anonymized documents

use crate::anonymization::config::AuditConfig;
use crate::anonymization::redaction::Redaction;
use crate::anonymization::report::AnonymizationReport;
use crate::domain::{Result, VeilError};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One line in the audit log
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    document: String,
    dry_run: bool,
    names_detected: usize,
    runs_rewritten: usize,
    redactions_count: usize,
    processing_time_ms: u64,
    redactions: Vec<AuditRedaction>,
}

#[derive(Debug, Serialize)]
struct AuditRedaction {
    kind: String,
    paragraph: usize,
    run: usize,
    /// SHA-256 of the redacted value; plaintext is never written
    value_hash: String,
}

/// Appends one entry per anonymized document
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a logger, creating the log directory when enabled
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    VeilError::Audit(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Create a logger from the `[audit]` section
    pub fn from_config(config: &AuditConfig) -> Result<Self> {
        Self::new(config.log_path.clone(), config.json_format, config.enabled)
    }

    /// Whether entries are written at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the outcome for `document`
    pub fn log_anonymization(&self, document: &Path, report: &AnonymizationReport) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            document: document
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| document.display().to_string()),
            dry_run: report.dry_run,
            names_detected: report.names_detected,
            runs_rewritten: report.runs_rewritten,
            redactions_count: report.total_redactions(),
            processing_time_ms: report.processing_time_ms,
            redactions: report.records().iter().map(audit_redaction).collect(),
        };

        self.write_entry(&entry)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                VeilError::Audit(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        let line = if self.json_format {
            serde_json::to_string(entry)?
        } else {
            format!(
                "[{}] Document: {} | Names: {} | Runs: {} | Redactions: {} | Dry run: {} | Time: {}ms",
                entry.timestamp,
                entry.document,
                entry.names_detected,
                entry.runs_rewritten,
                entry.redactions_count,
                entry.dry_run,
                entry.processing_time_ms
            )
        };

        writeln!(file, "{line}")
            .map_err(|e| VeilError::Audit(format!("Failed to write audit entry: {e}")))
    }
}

fn audit_redaction(redaction: &Redaction) -> AuditRedaction {
    AuditRedaction {
        kind: redaction.kind.placeholder().to_string(),
        paragraph: redaction.paragraph_index,
        run: redaction.run_index,
        value_hash: hash_value(&redaction.original),
    }
}

/// Hex SHA-256 of a redacted value
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::boundary::SectionBoundaries;
    use crate::anonymization::redaction::{RedactionKind, RunRewrite};
    use tempfile::tempdir;

    fn report() -> AnonymizationReport {
        let mut report = AnonymizationReport::new(
            SectionBoundaries {
                reference_start: 5,
                author_section_end: 2,
                paragraph_count: 6,
            },
            false,
        );
        report.names_detected = 1;
        report.add_rewrites(vec![RunRewrite {
            paragraph_index: 1,
            run_index: 0,
            text: "[EMAIL]".to_string(),
            redactions: vec![Redaction {
                kind: RedactionKind::Email,
                paragraph_index: 1,
                run_index: 0,
                original: "jane.doe@uni.edu".to_string(),
            }],
        }]);
        report
    }

    #[test]
    fn test_hash_value() {
        assert_eq!(hash_value("jane@uni.edu"), hash_value("jane@uni.edu"));
        assert_ne!(hash_value("jane@uni.edu"), hash_value("john@uni.edu"));
        assert_eq!(hash_value("").len(), 64);
    }

    #[test]
    fn test_json_entry_hashes_values() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit").join("veil.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        logger
            .log_anonymization(Path::new("/papers/paper.json"), &report())
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(entry["document"], "paper.json");
        assert_eq!(entry["redactions_count"], 1);
        assert_eq!(entry["redactions"][0]["kind"], "[EMAIL]");
        assert_eq!(entry["redactions"][0]["value_hash"], hash_value("jane.doe@uni.edu"));
        assert!(!content.contains("jane.doe@uni.edu"));
    }

    #[test]
    fn test_plain_text_entries_append() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("veil.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        logger.log_anonymization(Path::new("a.json"), &report()).unwrap();
        logger.log_anonymization(Path::new("b.json"), &report()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("Document: a.json | Names: 1 | Runs: 1 | Redactions: 1"));
        assert!(!content.contains("jane.doe@uni.edu"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("veil.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger.log_anonymization(Path::new("a.json"), &report()).unwrap();

        assert!(!logger.is_enabled());
        assert!(!log_path.exists());
        assert!(!dir.path().join("nested").exists());
    }
}
