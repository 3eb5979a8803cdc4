//! Anonymize command implementation
//!
//! This module implements the `anonymize` command, which removes author
//! information from a single document.

use crate::anonymization::DocumentAnonymizer;
use crate::config::load_config_or_default;
use crate::document::{DocumentStore, JsonDocumentStore};
use crate::recognizer::build_recognizer;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Document to anonymize
    pub input: String,

    /// Output path (defaults to `<stem>_anonymized.<ext>` next to the input)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Detect and report without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Print the anonymization report as JSON on stdout
    #[arg(long)]
    pub report: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting anonymize command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let store: Arc<dyn DocumentStore> = Arc::new(JsonDocumentStore::new());
        let input = PathBuf::from(&self.input);

        if !store.accepts(&input) {
            eprintln!(
                "Unsupported input file: {} (expected .{})",
                input.display(),
                store.extension()
            );
            return Ok(2);
        }

        let output = match &self.output {
            Some(path) => PathBuf::from(path),
            None => default_output_path(&input, store.extension()),
        };

        let recognizer = match build_recognizer(&config.recognizer) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build name recognizer");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let anonymizer = DocumentAnonymizer::new(&config, recognizer, store)?;

        match anonymizer.try_anonymize_document(&input, &output) {
            Ok(report) => {
                if self.report {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("{}", report.summary());
                    if !report.dry_run {
                        println!("Output written to {}", output.display());
                    }
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(input = %input.display(), error = %e, "Anonymization failed");
                eprintln!("Anonymization failed: {e}");
                Ok(1)
            }
        }
    }
}

/// `<dir>/<stem>_anonymized.<ext>` for `input`
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    input.with_file_name(format!("{stem}_anonymized.{extension}"))
}
