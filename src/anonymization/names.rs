//! Person-name extraction from the author section

use crate::document::Document;
use crate::domain::Result;
use crate::recognizer::NameRecognizer;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Distinct, case-sensitive surface forms of detected person names
pub type DetectedNameSet = BTreeSet<String>;

/// Spans this short are initials such as "J." rather than names
const MAX_INITIAL_CHARS: usize = 2;

/// Runs the name recognizer over the author section
#[derive(Clone)]
pub struct NameExtractor {
    recognizer: Arc<dyn NameRecognizer>,
}

impl NameExtractor {
    /// Create an extractor backed by a shared recognizer
    pub fn new(recognizer: Arc<dyn NameRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Collect person names from paragraphs `[0, author_section_end)`
    ///
    /// The paragraphs are joined with single spaces and recognised in one
    /// call, so the recognizer never sees text past the author section.
    ///
    /// # Errors
    ///
    /// Propagates recognizer failures.
    pub fn extract_person_names(
        &self,
        document: &Document,
        author_section_end: usize,
    ) -> Result<DetectedNameSet> {
        let end = author_section_end.min(document.paragraph_count());
        let author_text = document.paragraphs()[..end]
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join(" ");

        let mut names = DetectedNameSet::new();
        for span in self.recognizer.recognize(&author_text)? {
            if span.is_person() && span.text.chars().count() > MAX_INITIAL_CHARS {
                tracing::debug!(name = %span.text, "Detected person name");
                names.insert(span.text);
            }
        }

        tracing::info!(
            count = names.len(),
            recognizer = self.recognizer.name(),
            "Extracted person names from author section"
        );
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{EntityLabel, EntitySpan};
    use std::sync::Mutex;

    /// Returns fixed spans and records every text it was given
    struct FixedRecognizer {
        spans: Vec<EntitySpan>,
        seen: Mutex<Vec<String>>,
    }

    impl FixedRecognizer {
        fn new(spans: Vec<EntitySpan>) -> Arc<Self> {
            Arc::new(Self {
                spans,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl NameRecognizer for FixedRecognizer {
        fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
            self.seen.lock().unwrap().push(text.to_string());
            Ok(self.spans.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn span(text: &str, label: EntityLabel) -> EntitySpan {
        EntitySpan {
            text: text.to_string(),
            label,
            start: 0,
            end: text.len(),
        }
    }

    #[test]
    fn test_recognizer_sees_only_author_section() {
        let recognizer = FixedRecognizer::new(Vec::new());
        let extractor = NameExtractor::new(recognizer.clone());
        let doc = Document::from_texts(["Jane Doe", "MIT", "Abstract", "Smith, J."]);

        extractor.extract_person_names(&doc, 2).unwrap();

        let seen = recognizer.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), ["Jane Doe MIT"]);
    }

    #[test]
    fn test_filters_labels_initials_and_duplicates() {
        let recognizer = FixedRecognizer::new(vec![
            span("Jane Doe", EntityLabel::Person),
            span("J.", EntityLabel::Person),
            span("Jane Doe", EntityLabel::Person),
            span("MIT", EntityLabel::Organization),
            span("Li Na", EntityLabel::Person),
        ]);
        let extractor = NameExtractor::new(recognizer);
        let doc = Document::from_texts(["Jane Doe, Li Na, J."]);

        let names = extractor.extract_person_names(&doc, 1).unwrap();
        let expected: DetectedNameSet = ["Jane Doe", "Li Na"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_empty_author_section_still_recognised_once() {
        let recognizer = FixedRecognizer::new(Vec::new());
        let extractor = NameExtractor::new(recognizer.clone());

        let names = extractor
            .extract_person_names(&Document::from_texts(["Abstract"]), 0)
            .unwrap();

        assert!(names.is_empty());
        assert_eq!(recognizer.seen.lock().unwrap().as_slice(), [""]);
    }
}
