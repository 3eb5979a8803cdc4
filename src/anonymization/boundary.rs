//! Section boundary detection
//!
//! Two indices partition a document: `reference_start`, the first
//! bibliography heading, and `author_section_end`, one past the last
//! paragraph of the author block. Everything the engine rewrites lies in
//! `[0, author_section_end)`; nothing at or after `reference_start` is ever
//! touched.

use super::config::DetectionConfig;
use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Headings that open the reference section
pub const REFERENCE_MARKERS: &[&str] = &[
    "references",
    "bibliography",
    "works cited",
    "literature cited",
    "cited literature",
];

/// Headings that open the scholarly content after the author block
pub const CONTENT_START_MARKERS: &[&str] = &[
    "abstract",
    "introduction",
    "background",
    "methods",
    "methodology",
    "materials and methods",
];

/// Boundary indices for one document
///
/// Always satisfies `author_section_end <= reference_start <= paragraph_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBoundaries {
    /// Index of the reference heading, or `paragraph_count` if there is none
    pub reference_start: usize,
    /// One past the last author-section paragraph
    pub author_section_end: usize,
    /// Total paragraphs in the document
    pub paragraph_count: usize,
}

/// Locates the author and reference sections of a document
#[derive(Debug, Clone, Default)]
pub struct BoundaryDetector {
    config: DetectionConfig,
}

impl BoundaryDetector {
    /// Create a detector
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Compute both boundaries
    pub fn detect(&self, document: &Document) -> SectionBoundaries {
        let reference_start = self.find_reference_section(document);
        let author_section_end = self.find_author_section_end(document, reference_start);

        SectionBoundaries {
            reference_start,
            author_section_end,
            paragraph_count: document.paragraph_count(),
        }
    }

    /// Index of the first reference-section heading
    ///
    /// Returns the paragraph count when no heading is found, so the
    /// reference boundary defaults to the end of the document.
    pub fn find_reference_section(&self, document: &Document) -> usize {
        for (idx, para) in document.paragraphs().iter().enumerate() {
            if self.is_heading(&para.text(), REFERENCE_MARKERS) {
                tracing::info!(paragraph = idx, heading = %para.text().trim(), "Found references section");
                return idx;
            }
        }

        tracing::info!("No references section found, whole document is eligible");
        document.paragraph_count()
    }

    /// Index one past the author section
    ///
    /// Only paragraphs before `reference_start` are searched. Without a
    /// content-start heading the author section is assumed to span the first
    /// `fallback_author_paragraphs` paragraphs, capped at `reference_start`.
    pub fn find_author_section_end(&self, document: &Document, reference_start: usize) -> usize {
        let reference_start = reference_start.min(document.paragraph_count());

        for (idx, para) in document.paragraphs()[..reference_start].iter().enumerate() {
            if self.is_heading(&para.text(), CONTENT_START_MARKERS) {
                tracing::info!(paragraph = idx, heading = %para.text().trim(), "Found content start");
                return idx;
            }
        }

        let default_end = self.config.fallback_author_paragraphs.min(reference_start);
        tracing::info!(
            author_section_end = default_end,
            "No content marker found, using default author section end"
        );
        default_end
    }

    /// Short paragraph containing one of `markers`
    fn is_heading(&self, text: &str, markers: &[&str]) -> bool {
        let text = text.trim().to_lowercase();
        text.chars().count() < self.config.max_heading_length
            && markers.iter().any(|marker| text.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn detector() -> BoundaryDetector {
        BoundaryDetector::default()
    }

    #[test_case("References" ; "plain")]
    #[test_case("  REFERENCES  " ; "upper case padded")]
    #[test_case("7. Bibliography" ; "numbered")]
    #[test_case("Works Cited" ; "works cited")]
    #[test_case("Literature cited" ; "literature cited")]
    #[test_case("Cited Literature" ; "cited literature")]
    fn test_reference_heading(heading: &str) {
        let doc = Document::from_texts(["Title", "Abstract", heading, "Smith, J. (2020)"]);
        assert_eq!(detector().find_reference_section(&doc), 2);
    }

    #[test]
    fn test_long_paragraph_is_not_a_heading() {
        let doc = Document::from_texts([
            "Title",
            "The references listed at the end of this article were checked by hand.",
        ]);
        assert_eq!(detector().find_reference_section(&doc), 2);
    }

    #[test]
    fn test_first_reference_heading_wins() {
        let doc = Document::from_texts(["References", "Bibliography"]);
        assert_eq!(detector().find_reference_section(&doc), 0);
    }

    #[test_case("Abstract" ; "abstract")]
    #[test_case("1. Introduction" ; "numbered introduction")]
    #[test_case("Background" ; "background")]
    #[test_case("Materials and Methods" ; "materials and methods")]
    #[test_case("METHODOLOGY" ; "methodology")]
    fn test_content_start_heading(heading: &str) {
        let doc = Document::from_texts(["Title", "Jane Doe", heading, "Body"]);
        assert_eq!(detector().find_author_section_end(&doc, 4), 2);
    }

    #[test]
    fn test_content_marker_after_references_is_ignored() {
        let doc = Document::from_texts(["Title", "Jane Doe", "References", "Abstract"]);
        let boundaries = detector().detect(&doc);
        assert_eq!(boundaries.reference_start, 2);
        assert_eq!(boundaries.author_section_end, 2);
    }

    #[test]
    fn test_fallback_is_fifteen_paragraphs() {
        let mut texts: Vec<String> = (0..20).map(|i| format!("Front matter line {i}")).collect();
        texts.push("References".to_string());
        texts.push("Smith, J. (2020)".to_string());
        let mut doc = Document::from_texts(texts);
        // reference heading sits at index 20
        assert_eq!(detector().find_reference_section(&doc), 20);
        assert_eq!(detector().detect(&doc).author_section_end, 15);

        doc.paragraphs_mut()[20].runs_mut()[0].set_text("Appendix");
        assert_eq!(detector().detect(&doc).author_section_end, 15);
    }

    #[test]
    fn test_fallback_capped_by_reference_start() {
        let doc = Document::from_texts(["Title", "Jane Doe", "References", "Doe, J."]);
        let boundaries = detector().detect(&doc);
        assert_eq!(boundaries.reference_start, 2);
        assert_eq!(boundaries.author_section_end, 2);
    }

    #[test]
    fn test_reference_start_beyond_document_is_clamped() {
        let doc = Document::from_texts(["Title", "Jane Doe"]);
        assert_eq!(detector().find_author_section_end(&doc, 99), 2);
    }

    #[test]
    fn test_empty_document() {
        let boundaries = detector().detect(&Document::new());
        assert_eq!(
            boundaries,
            SectionBoundaries {
                reference_start: 0,
                author_section_end: 0,
                paragraph_count: 0,
            }
        );
    }

    #[test]
    fn test_custom_fallback() {
        let detector = BoundaryDetector::new(DetectionConfig {
            fallback_author_paragraphs: 3,
            ..Default::default()
        });
        let doc = Document::from_texts(["a", "b", "c", "d", "e"]);
        assert_eq!(detector.detect(&doc).author_section_end, 3);
    }

    #[test]
    fn test_boundaries_are_monotonic() {
        let docs = [
            Document::from_texts(["Abstract", "References"]),
            Document::from_texts(["References", "Abstract"]),
            Document::from_texts(["x"; 30]),
            Document::from_texts([""]),
            Document::from_texts(["Title", "Intro text", "Introduction", "Body"]),
        ];

        for doc in &docs {
            let b = detector().detect(doc);
            assert!(b.author_section_end <= b.reference_start);
            assert!(b.reference_start <= b.paragraph_count);
        }
    }
}
