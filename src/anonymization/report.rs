//! Per-document anonymization report
//!
//! Carries counts and boundary indices only. Redacted values are kept for the
//! audit log but never serialized.

use super::boundary::SectionBoundaries;
use super::redaction::{Redaction, RedactionKind, RunRewrite};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of anonymizing one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnonymizationReport {
    /// Total paragraphs in the document
    pub paragraph_count: usize,

    /// Index of the reference heading (paragraph count when absent)
    pub reference_start: usize,

    /// One past the last author-section paragraph
    pub author_section_end: usize,

    /// Distinct person names detected
    pub names_detected: usize,

    /// Runs whose text changed (or would change, in dry-run mode)
    pub runs_rewritten: usize,

    /// Redactions by kind
    pub redactions: BTreeMap<RedactionKind, usize>,

    /// Wall-clock processing time
    pub processing_time_ms: u64,

    /// Whether the document was left unmodified
    pub dry_run: bool,

    #[serde(skip)]
    records: Vec<Redaction>,
}

impl AnonymizationReport {
    /// Start a report from the detected boundaries
    pub fn new(boundaries: SectionBoundaries, dry_run: bool) -> Self {
        Self {
            paragraph_count: boundaries.paragraph_count,
            reference_start: boundaries.reference_start,
            author_section_end: boundaries.author_section_end,
            dry_run,
            ..Default::default()
        }
    }

    /// Record the run rewrites produced by the redaction engine
    pub fn add_rewrites(&mut self, rewrites: Vec<RunRewrite>) {
        self.runs_rewritten += rewrites.len();

        for rewrite in rewrites {
            for redaction in rewrite.redactions {
                *self.redactions.entry(redaction.kind).or_insert(0) += 1;
                self.records.push(redaction);
            }
        }
    }

    /// Redactions of one kind
    pub fn count(&self, kind: RedactionKind) -> usize {
        self.redactions.get(&kind).copied().unwrap_or(0)
    }

    /// All redactions
    pub fn total_redactions(&self) -> usize {
        self.redactions.values().sum()
    }

    /// Individual redacted values, in document order
    pub fn records(&self) -> &[Redaction] {
        &self.records
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mode = if self.dry_run { " (dry run)" } else { "" };
        format!(
            "Author section: paragraphs 0..{} of {} (references at {}){}\n\
             Names detected: {}\n\
             Runs rewritten: {}\n\
             Redactions: {} names, {} emails, {} ORCIDs, {} affiliations",
            self.author_section_end,
            self.paragraph_count,
            self.reference_start,
            mode,
            self.names_detected,
            self.runs_rewritten,
            self.count(RedactionKind::AuthorName),
            self.count(RedactionKind::Email),
            self.count(RedactionKind::Orcid),
            self.count(RedactionKind::Affiliation),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(kinds: &[RedactionKind]) -> RunRewrite {
        RunRewrite {
            paragraph_index: 0,
            run_index: 0,
            text: String::new(),
            redactions: kinds
                .iter()
                .map(|kind| Redaction {
                    kind: *kind,
                    paragraph_index: 0,
                    run_index: 0,
                    original: "secret@uni.edu".to_string(),
                })
                .collect(),
        }
    }

    fn boundaries() -> SectionBoundaries {
        SectionBoundaries {
            reference_start: 8,
            author_section_end: 3,
            paragraph_count: 10,
        }
    }

    #[test]
    fn test_counts_by_kind() {
        let mut report = AnonymizationReport::new(boundaries(), false);
        report.add_rewrites(vec![
            rewrite(&[RedactionKind::AuthorName, RedactionKind::Email]),
            rewrite(&[RedactionKind::AuthorName]),
        ]);

        assert_eq!(report.runs_rewritten, 2);
        assert_eq!(report.count(RedactionKind::AuthorName), 2);
        assert_eq!(report.count(RedactionKind::Email), 1);
        assert_eq!(report.count(RedactionKind::Orcid), 0);
        assert_eq!(report.total_redactions(), 3);
        assert_eq!(report.records().len(), 3);
    }

    #[test]
    fn test_serialized_report_omits_values() {
        let mut report = AnonymizationReport::new(boundaries(), true);
        report.add_rewrites(vec![rewrite(&[RedactionKind::Email])]);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"email\":1"));
        assert!(json.contains("\"dry_run\":true"));
        assert!(!json.contains("secret@uni.edu"));
    }

    #[test]
    fn test_summary() {
        let report = AnonymizationReport::new(boundaries(), true);
        let summary = report.summary();
        assert!(summary.contains("paragraphs 0..3 of 10"));
        assert!(summary.contains("(dry run)"));
    }
}
