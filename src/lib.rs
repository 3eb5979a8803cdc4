// Veil - Author Anonymization for Academic Papers
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - Author Anonymization for Academic Papers
//!
//! Veil removes author-identifying information from the front matter of an
//! academic paper so it can go out for blind review, while leaving the body
//! and the reference list exactly as written.
//!
//! ## Overview
//!
//! For each document Veil:
//! - **Locates** the reference section and the end of the author block
//! - **Recognises** person names in the author block only
//! - **Redacts** names, email addresses, ORCID iDs and affiliation lines
//!   with fixed placeholders, run by run, keeping every run's formatting
//! - **Records** a hashed audit entry of what was removed
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Boundary detection, name extraction, redaction, audit
//! - [`document`] - Paragraph/run document model and persistence
//! - [`recognizer`] - Pluggable person-name recognition
//! - [`domain`] - Error and result types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use veil::anonymization::DocumentAnonymizer;
//! use veil::config::load_config_or_default;
//! use veil::document::JsonDocumentStore;
//! use veil::recognizer::build_recognizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("veil.toml")?;
//!
//!     // Built once and shared by every document
//!     let recognizer = build_recognizer(&config.recognizer)?;
//!     let anonymizer =
//!         DocumentAnonymizer::new(&config, recognizer, Arc::new(JsonDocumentStore::new()))?;
//!
//!     let report = anonymizer.try_anonymize_document(
//!         Path::new("paper.json"),
//!         Path::new("paper_anonymized.json"),
//!     )?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Placeholders
//!
//! | Content          | Placeholder              |
//! |------------------|--------------------------|
//! | Person name      | `[AUTHOR_NAME]`          |
//! | Email address    | `[EMAIL]`                |
//! | ORCID iD         | `[ORCID]`                |
//! | Affiliation line | `[AUTHOR_AFFILIATION]`   |
//!
//! ## Error Handling
//!
//! Veil uses the [`domain::VeilError`] type for all errors:
//!
//! ```rust,no_run
//! use veil::domain::VeilError;
//!
//! fn example() -> Result<(), VeilError> {
//!     let config = veil::config::load_config("veil.toml")?;
//!     Ok(())
//! }
//! ```

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod logging;
pub mod recognizer;
