//! Run-level redaction of the author section
//!
//! Each run in the author section is rewritten independently, in a fixed
//! order: person names, email addresses, ORCID iDs, and finally whole-run
//! affiliation replacement, which is judged on the run's original text and
//! supersedes the earlier substitutions.

use super::affiliation::is_affiliation_line;
use super::names::DetectedNameSet;
use crate::document::Document;
use crate::domain::{Result, VeilError};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b";
const ORCID_PATTERN: &str = r"\b[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{3}[0-9X]\b";

/// Category of redacted content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionKind {
    /// Person name
    AuthorName,
    /// Email address
    Email,
    /// ORCID identifier
    Orcid,
    /// Whole affiliation line
    Affiliation,
}

impl RedactionKind {
    /// Placeholder written in place of the redacted content
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::AuthorName => "[AUTHOR_NAME]",
            Self::Email => "[EMAIL]",
            Self::Orcid => "[ORCID]",
            Self::Affiliation => "[AUTHOR_AFFILIATION]",
        }
    }
}

/// One redacted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    /// What was redacted
    pub kind: RedactionKind,
    /// Paragraph holding the run
    pub paragraph_index: usize,
    /// Run within the paragraph
    pub run_index: usize,
    /// Text that was removed; never logged in plaintext
    pub original: String,
}

/// A run whose text changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRewrite {
    /// Paragraph holding the run
    pub paragraph_index: usize,
    /// Run within the paragraph
    pub run_index: usize,
    /// Replacement text
    pub text: String,
    /// Values redacted from this run
    pub redactions: Vec<Redaction>,
}

/// Rewrites author-identifying content in run text
///
/// Email and ORCID patterns are compiled once; name patterns are compiled
/// per document from the detected name set.
#[derive(Debug, Clone)]
pub struct RedactionEngine {
    email_pattern: Regex,
    orcid_pattern: Regex,
}

impl RedactionEngine {
    /// Create an engine with precompiled patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_pattern: compile(EMAIL_PATTERN)?,
            orcid_pattern: compile(ORCID_PATTERN)?,
        })
    }

    /// Rewrite runs of paragraphs `[0, author_section_end)` in place
    ///
    /// Only runs whose text changes are written; formatting is never touched.
    /// Returns the rewrites that were applied.
    pub fn anonymize_author_section(
        &self,
        document: &mut Document,
        author_section_end: usize,
        names: &DetectedNameSet,
    ) -> Result<Vec<RunRewrite>> {
        let rewrites = self.plan_author_section(document, author_section_end, names)?;
        let paragraphs = document.paragraphs_mut();

        for rewrite in &rewrites {
            let run = &mut paragraphs[rewrite.paragraph_index].runs_mut()[rewrite.run_index];
            tracing::debug!(
                paragraph = rewrite.paragraph_index,
                run = rewrite.run_index,
                redactions = rewrite.redactions.len(),
                "Rewriting run"
            );
            run.set_text(rewrite.text.clone());
        }

        Ok(rewrites)
    }

    /// Compute the rewrites for paragraphs `[0, author_section_end)` without
    /// modifying the document
    pub fn plan_author_section(
        &self,
        document: &Document,
        author_section_end: usize,
        names: &DetectedNameSet,
    ) -> Result<Vec<RunRewrite>> {
        let name_patterns = compile_name_patterns(names)?;
        let end = author_section_end.min(document.paragraph_count());
        let mut rewrites = Vec::new();

        for (paragraph_index, para) in document.paragraphs()[..end].iter().enumerate() {
            for (run_index, run) in para.runs().iter().enumerate() {
                let (text, found) = self.redact_text(run.text(), &name_patterns);
                if text == run.text() {
                    continue;
                }

                let redactions = found
                    .into_iter()
                    .map(|(kind, original)| Redaction {
                        kind,
                        paragraph_index,
                        run_index,
                        original,
                    })
                    .collect();

                rewrites.push(RunRewrite {
                    paragraph_index,
                    run_index,
                    text,
                    redactions,
                });
            }
        }

        Ok(rewrites)
    }

    /// Apply all redaction steps to one run's text
    ///
    /// Returns the rewritten text and the values removed from it.
    fn redact_text(
        &self,
        original: &str,
        name_patterns: &[Regex],
    ) -> (String, Vec<(RedactionKind, String)>) {
        if is_affiliation_line(original) {
            let kind = RedactionKind::Affiliation;
            return (
                kind.placeholder().to_string(),
                vec![(kind, original.to_string())],
            );
        }

        let mut found = Vec::new();
        let mut text = original.to_string();

        for pattern in name_patterns {
            text = replace_all(pattern, &text, RedactionKind::AuthorName, &mut found);
        }
        text = replace_all(&self.email_pattern, &text, RedactionKind::Email, &mut found);
        text = replace_all(&self.orcid_pattern, &text, RedactionKind::Orcid, &mut found);

        (text, found)
    }
}

fn replace_all(
    pattern: &Regex,
    text: &str,
    kind: RedactionKind,
    found: &mut Vec<(RedactionKind, String)>,
) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            found.push((kind, caps[0].to_string()));
            kind.placeholder()
        })
        .into_owned()
}

/// Whole-word, case-insensitive patterns, longest name first
///
/// Longer names go first so "Jane Doe" is replaced before a bare "Jane".
fn compile_name_patterns(names: &DetectedNameSet) -> Result<Vec<Regex>> {
    let mut ordered: Vec<&String> = names.iter().collect();
    ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

    ordered
        .into_iter()
        .map(|name| compile(&format!(r"(?i)\b{}\b", regex::escape(name))))
        .collect()
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| VeilError::Validation(format!("Invalid redaction pattern {pattern}: {e}")))
}
