//! Paragraph/run document model
//!
//! The engine sees a document as an ordered list of paragraphs, each an
//! ordered list of formatted runs. Paragraph order is the coordinate system
//! for every boundary index, and the run is the unit of mutation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loaded document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in reading order
    #[serde(default)]
    paragraphs: Vec<Paragraph>,

    /// Document-level properties carried through untouched
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    properties: Map<String, Value>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from paragraphs
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            properties: Map::new(),
        }
    }

    /// Create a document with one single-run paragraph per string
    ///
    /// # Examples
    ///
    /// ```
    /// use veil::document::Document;
    ///
    /// let doc = Document::from_texts(["Title", "Abstract", "References"]);
    /// assert_eq!(doc.paragraph_count(), 3);
    /// assert_eq!(doc.paragraphs()[1].text(), "Abstract");
    /// ```
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_paragraphs(texts.into_iter().map(Paragraph::from_text).collect())
    }

    /// Paragraphs in reading order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Mutable access to paragraphs; the list itself cannot grow or shrink
    pub fn paragraphs_mut(&mut self) -> &mut [Paragraph] {
        &mut self.paragraphs
    }

    /// Number of paragraphs
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Document-level properties
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

/// A paragraph made of formatted runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in order
    #[serde(default)]
    runs: Vec<Run>,

    /// Paragraph style name (e.g. "Heading 1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}

impl Paragraph {
    /// Create a paragraph from runs
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs, style: None }
    }

    /// Create a paragraph holding a single unformatted run
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Run::new(text)])
    }

    /// Set the paragraph style
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Paragraph style name
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Runs in order
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Mutable access to runs
    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    /// Concatenated text of all runs
    ///
    /// Derived on every call; used for matching only.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A contiguous span of text sharing one formatting style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Run text
    #[serde(default)]
    text: String,

    /// Formatting attributes, opaque to the anonymization engine
    #[serde(default, skip_serializing_if = "RunFormat::is_plain")]
    format: RunFormat,
}

impl Run {
    /// Create an unformatted run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: RunFormat::default(),
        }
    }

    /// Set the run formatting
    pub fn with_format(mut self, format: RunFormat) -> Self {
        self.format = format;
        self
    }

    /// Run text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the run text; formatting is left as is
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Formatting attributes
    pub fn format(&self) -> &RunFormat {
        &self.format
    }
}

/// Run formatting attributes
///
/// Common attributes are typed; anything else the producing tool emitted is
/// kept in `extra` and written back verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFormat {
    /// Bold
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Italic
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    /// Underline
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    /// Text colour as RGB hex (e.g. "1F3864")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Vertical alignment such as "superscript"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,

    /// Unrecognised attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RunFormat {
    /// True when no attribute is set
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let para = Paragraph::new(vec![Run::new("John "), Run::new("Smith"), Run::new("¹")]);
        assert_eq!(para.text(), "John Smith¹");
    }

    #[test]
    fn test_set_text_keeps_format() {
        let format = RunFormat {
            bold: true,
            font_size: Some(12.0),
            ..Default::default()
        };
        let mut run = Run::new("Jane Doe").with_format(format.clone());
        run.set_text("[AUTHOR_NAME]");

        assert_eq!(run.text(), "[AUTHOR_NAME]");
        assert_eq!(run.format(), &format);
    }

    #[test]
    fn test_unknown_format_attributes_round_trip() {
        let raw = json!({
            "paragraphs": [{
                "runs": [{
                    "text": "Abstract",
                    "format": {"bold": true, "highlight": "yellow", "kerning": 2}
                }]
            }]
        });

        let doc: Document = serde_json::from_value(raw.clone()).unwrap();
        let format = doc.paragraphs()[0].runs()[0].format();
        assert!(format.bold);
        assert_eq!(format.extra.get("highlight"), Some(&json!("yellow")));

        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn test_plain_run_omits_format() {
        let value = serde_json::to_value(Run::new("x")).unwrap();
        assert_eq!(value, json!({"text": "x"}));
    }
}
