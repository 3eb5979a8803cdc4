//! Author anonymization for academic papers
//!
//! Removes author-identifying content from the front matter of a paper while
//! leaving the scholarly content and the reference list untouched.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Boundaries**: heading-based detection of the author block and references
//! - **Names**: person-name extraction through a pluggable recognizer
//! - **Redaction**: run-level substitution of names, emails, ORCID iDs and affiliations
//! - **Audit**: structured logging with hashed redacted values
//!
//! # Usage
//!
//! ```rust,ignore
//! use veil::anonymization::DocumentAnonymizer;
//!
//! let anonymizer = DocumentAnonymizer::new(&config, recognizer, store)?;
//! let report = anonymizer.anonymize(&mut document)?;
//! ```

pub mod affiliation;
pub mod audit;
pub mod boundary;
pub mod config;
pub mod engine;
pub mod names;
pub mod redaction;
pub mod report;

// Re-export main types
pub use boundary::{BoundaryDetector, SectionBoundaries};
pub use config::{AuditConfig, DetectionConfig};
pub use engine::DocumentAnonymizer;
pub use names::{DetectedNameSet, NameExtractor};
pub use redaction::{RedactionEngine, RedactionKind};
pub use report::AnonymizationReport;
