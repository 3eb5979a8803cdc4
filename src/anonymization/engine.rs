//! Document anonymization engine
//!
//! [`DocumentAnonymizer`] runs the full pipeline for one document:
//!
//! 1. **Boundaries**: locate the reference section and the end of the author block
//! 2. **Names**: run the recognizer over the author block only
//! 3. **Redaction**: rewrite author-block runs with fixed placeholders
//! 4. **Audit**: append a hashed record of what was removed
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use veil::anonymization::DocumentAnonymizer;
//! use veil::config::VeilConfig;
//! use veil::document::JsonDocumentStore;
//! use veil::recognizer::build_recognizer;
//!
//! # fn example() -> veil::domain::Result<()> {
//! let config = VeilConfig::default();
//! let recognizer = build_recognizer(&config.recognizer)?;
//! let anonymizer = DocumentAnonymizer::new(&config, recognizer, Arc::new(JsonDocumentStore::new()))?;
//!
//! let ok = anonymizer.anonymize_document(Path::new("paper.json"), Path::new("paper_anonymized.json"));
//! println!("success: {ok}");
//! # Ok(())
//! # }
//! ```

use super::audit::AuditLogger;
use super::boundary::BoundaryDetector;
use super::names::NameExtractor;
use super::redaction::RedactionEngine;
use super::report::AnonymizationReport;
use crate::config::VeilConfig;
use crate::document::{Document, DocumentStore};
use crate::domain::Result;
use crate::recognizer::NameRecognizer;
use crate::{log_document_complete, log_document_start};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Anonymizes author information in documents
///
/// Holds no per-document state, so one instance can be shared across threads
/// behind an `Arc` and used on distinct documents concurrently.
pub struct DocumentAnonymizer {
    boundaries: BoundaryDetector,
    names: NameExtractor,
    redaction: RedactionEngine,
    store: Arc<dyn DocumentStore>,
    audit_logger: Option<AuditLogger>,
    dry_run: bool,
}

impl DocumentAnonymizer {
    /// Create an anonymizer
    ///
    /// # Errors
    ///
    /// Returns an error if the audit log directory cannot be created.
    pub fn new(
        config: &VeilConfig,
        recognizer: Arc<dyn NameRecognizer>,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self> {
        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::from_config(&config.audit)?)
        } else {
            None
        };

        Ok(Self {
            boundaries: BoundaryDetector::new(config.detection.clone()),
            names: NameExtractor::new(recognizer),
            redaction: RedactionEngine::new()?,
            store,
            audit_logger,
            dry_run: config.application.dry_run,
        })
    }

    /// Override dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Anonymize an in-memory document
    ///
    /// In dry-run mode the document is left untouched and the report
    /// describes what would have been rewritten.
    ///
    /// # Errors
    ///
    /// Propagates recognizer failures.
    pub fn anonymize(&self, document: &mut Document) -> Result<AnonymizationReport> {
        let start = Instant::now();

        let boundaries = self.boundaries.detect(document);
        let names = self
            .names
            .extract_person_names(document, boundaries.author_section_end)?;

        let rewrites = if self.dry_run {
            self.redaction
                .plan_author_section(document, boundaries.author_section_end, &names)?
        } else {
            self.redaction
                .anonymize_author_section(document, boundaries.author_section_end, &names)?
        };

        let mut report = AnonymizationReport::new(boundaries, self.dry_run);
        report.names_detected = names.len();
        report.add_rewrites(rewrites);
        report.processing_time_ms = start.elapsed().as_millis() as u64;

        Ok(report)
    }

    /// Load, anonymize and save one document
    ///
    /// Nothing is saved in dry-run mode. Audit failures are logged and do not
    /// fail the run.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, recognition or saving fails.
    pub fn try_anonymize_document(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<AnonymizationReport> {
        log_document_start!(input.display(), self.dry_run);

        let mut document = self.store.load(input)?;
        let report = self.anonymize(&mut document)?;

        if self.dry_run {
            tracing::info!(output = %output.display(), "Dry run, output not written");
        } else {
            self.store.save(&document, output)?;
        }

        if let Some(ref logger) = self.audit_logger {
            if let Err(e) = logger.log_anonymization(input, &report) {
                tracing::warn!(error = %e, "Failed to write audit entry");
            }
        }

        log_document_complete!(output.display(), report);
        Ok(report)
    }

    /// Load, anonymize and save one document, reporting only success
    ///
    /// Returns `false` when the document cannot be loaded, recognised or
    /// saved; the cause is logged. A document with nothing to redact is a
    /// success.
    pub fn anonymize_document(&self, input: &Path, output: &Path) -> bool {
        match self.try_anonymize_document(input, output) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    input = %input.display(),
                    output = %output.display(),
                    error = %e,
                    "Anonymization failed"
                );
                false
            }
        }
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentAnonymizer>();
};
