//! Person-name recognition
//!
//! The anonymization engine treats entity recognition as an external
//! capability: given a text span, a [`NameRecognizer`] returns the substrings
//! it classifies, each with a label. Only [`EntityLabel::Person`] spans are
//! used downstream.
//!
//! A recognizer is built once per process and shared by reference
//! (`Arc<dyn NameRecognizer>`), so implementations must be `Send + Sync` and
//! reentrant.

pub mod heuristic;

use crate::config::RecognizerConfig;
use crate::domain::{Result, VeilError};
use std::sync::Arc;

pub use heuristic::HeuristicNameRecognizer;

/// Entity label attached to a recognised span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// Person name
    Person,
    /// Organisation name
    Organization,
    /// Place name
    Location,
    /// Anything else the recognizer tags
    Other,
}

/// A recognised span of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Surface text of the span
    pub text: String,
    /// Entity label
    pub label: EntityLabel,
    /// Byte offset of the span start in the input
    pub start: usize,
    /// Byte offset one past the span end in the input
    pub end: usize,
}

impl EntitySpan {
    /// Create a person span
    pub fn person(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: EntityLabel::Person,
            start,
            end,
        }
    }

    /// True for spans labelled [`EntityLabel::Person`]
    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}

/// Trait for named-entity recognizers
pub trait NameRecognizer: Send + Sync {
    /// Recognise entity spans in `text`
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Recognition`] if the text cannot be processed.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Build the process-wide recognizer described by `config`
///
/// # Errors
///
/// Returns [`VeilError::RecognizerUnavailable`] for an unknown recognizer kind
/// or a recognizer that fails to initialise.
pub fn build_recognizer(config: &RecognizerConfig) -> Result<Arc<dyn NameRecognizer>> {
    match config.kind.to_lowercase().as_str() {
        "heuristic" => {
            let recognizer = HeuristicNameRecognizer::from_config(config)?;
            tracing::info!(
                recognizer = recognizer.name(),
                max_name_tokens = config.max_name_tokens,
                "Loaded name recognizer"
            );
            Ok(Arc::new(recognizer))
        }
        other => Err(VeilError::RecognizerUnavailable(format!(
            "Unknown recognizer kind '{other}'. Must be one of: heuristic"
        ))),
    }
}
