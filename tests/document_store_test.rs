//! Integration tests for JSON document persistence

use std::path::Path;
use veil::document::{Document, DocumentStore, JsonDocumentStore};
use veil::domain::VeilError;

const PAPER_JSON: &str = r#"{
  "paragraphs": [
    {
      "style": "Title",
      "runs": [{ "text": "Ocean Heat Uptake", "format": { "bold": true, "font_size": 16.0 } }]
    },
    {
      "runs": [
        { "text": "Jane Doe" },
        { "text": "1", "format": { "vertical_align": "superscript", "w:rsidR": "00A1" } }
      ]
    },
    { "style": "Heading 1", "runs": [{ "text": "Abstract" }] }
  ],
  "properties": { "creator": "Jane Doe", "revision": 7 }
}"#;

#[test]
fn test_load_handwritten_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.json");
    std::fs::write(&path, PAPER_JSON).unwrap();

    let doc = JsonDocumentStore::new().load(&path).unwrap();

    assert_eq!(doc.paragraph_count(), 3);
    assert_eq!(doc.paragraphs()[0].style(), Some("Title"));
    assert_eq!(doc.paragraphs()[1].text(), "Jane Doe1");

    let title = doc.paragraphs()[0].runs()[0].format();
    assert!(title.bold);
    assert_eq!(title.font_size, Some(16.0));

    let marker = doc.paragraphs()[1].runs()[1].format();
    assert_eq!(marker.vertical_align.as_deref(), Some("superscript"));
    assert_eq!(marker.extra["w:rsidR"], "00A1");
    assert_eq!(doc.properties()["revision"], 7);
}

#[test]
fn test_unknown_attributes_survive_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("paper.json");
    let output = dir.path().join("copy.json");
    std::fs::write(&input, PAPER_JSON).unwrap();

    let store = JsonDocumentStore::new().pretty();
    let doc = store.load(&input).unwrap();
    store.save(&doc, &output).unwrap();

    let original: serde_json::Value = serde_json::from_str(PAPER_JSON).unwrap();
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved, original);
}

#[test]
fn test_save_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.json");
    let store = JsonDocumentStore::new();

    store.save(&Document::from_texts(["first"]), &path).unwrap();
    store.save(&Document::from_texts(["second"]), &path).unwrap();

    assert_eq!(store.load(&path).unwrap().paragraphs()[0].text(), "second");
}

#[test]
fn test_save_to_missing_directory_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("paper.json");

    let err = JsonDocumentStore::new()
        .save(&Document::from_texts(["x"]), &path)
        .unwrap_err();

    assert!(matches!(err, VeilError::Save(_)));
    assert!(!path.exists());
}

#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDocumentStore::new();

    let missing = store.load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, VeilError::Load(_)));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, r#"{ "paragraphs": [ { "runs": 3 } ] }"#).unwrap();
    let invalid = store.load(&broken).unwrap_err();
    assert!(matches!(invalid, VeilError::Load(_)));
    assert!(invalid.to_string().starts_with("Failed to load document"));
}

#[test]
fn test_store_extension() {
    let store = JsonDocumentStore::new();
    assert_eq!(store.extension(), "json");
    assert!(store.accepts(Path::new("/papers/Study.Json")));
    assert!(!store.accepts(Path::new("/papers/study.docx")));
}
