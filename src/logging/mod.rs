//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//! use veil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a document anonymization
///
/// # Example
///
/// ```no_run
/// use veil::log_document_start;
/// use std::path::Path;
///
/// log_document_start!(Path::new("paper.json").display(), false);
/// ```
#[macro_export]
macro_rules! log_document_start {
    ($input:expr, $dry_run:expr) => {
        tracing::info!(input = %$input, dry_run = $dry_run, "Anonymizing document");
    };
}

/// Log the outcome of a document anonymization
///
/// # Example
///
/// ```no_run
/// use veil::log_document_complete;
/// use veil::anonymization::AnonymizationReport;
///
/// let report = AnonymizationReport::default();
/// log_document_complete!("paper_anonymized.json", &report);
/// ```
#[macro_export]
macro_rules! log_document_complete {
    ($output:expr, $report:expr) => {
        tracing::info!(
            output = %$output,
            names_detected = $report.names_detected,
            runs_rewritten = $report.runs_rewritten,
            redactions = $report.total_redactions(),
            duration_ms = $report.processing_time_ms,
            "Document anonymized"
        );
    };
}
