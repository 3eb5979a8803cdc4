//! Document load/save
//!
//! [`DocumentStore`] is the seam to the container format. The anonymization
//! engine only ever calls `load` and `save`; [`JsonDocumentStore`] is the
//! store shipped with the crate.

use super::model::Document;
use crate::domain::{Result, VeilError};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads and saves documents in some container format
pub trait DocumentStore: Send + Sync {
    /// Load a document from `path`
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Load`] if the file cannot be read or parsed.
    fn load(&self, path: &Path) -> Result<Document>;

    /// Save a document to `path`
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Save`] if the document cannot be written. A failed
    /// save must not leave a partially written file at `path`.
    fn save(&self, document: &Document, path: &Path) -> Result<()>;

    /// File extension handled by this store, without the leading dot
    fn extension(&self) -> &'static str;

    /// Check whether `path` carries this store's extension (case-insensitive)
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(self.extension()))
    }
}

/// JSON serialisation of the paragraph/run model
#[derive(Debug, Clone, Default)]
pub struct JsonDocumentStore {
    pretty: bool,
}

impl JsonDocumentStore {
    /// Create a store writing compact JSON
    pub fn new() -> Self {
        Self::default()
    }

    /// Write indented JSON
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl DocumentStore for JsonDocumentStore {
    fn load(&self, path: &Path) -> Result<Document> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VeilError::Load(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| VeilError::Load(format!("{}: invalid document: {}", path.display(), e)))
    }

    fn save(&self, document: &Document, path: &Path) -> Result<()> {
        // Serialise fully before touching the filesystem
        let body = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        }
        .map_err(|e| VeilError::Save(format!("{}: {}", path.display(), e)))?;

        let staging = staging_path(path);
        if let Err(e) = fs::write(&staging, body) {
            let _ = fs::remove_file(&staging);
            return Err(VeilError::Save(format!("{}: {}", path.display(), e)));
        }

        fs::rename(&staging, path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            VeilError::Save(format!("{}: {}", path.display(), e))
        })
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Sibling path used while writing, so the target only ever holds a complete file
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_accepts_extension() {
        let store = JsonDocumentStore::new();
        assert!(store.accepts(Path::new("paper.json")));
        assert!(store.accepts(Path::new("PAPER.JSON")));
        assert!(!store.accepts(Path::new("paper.docx")));
        assert!(!store.accepts(Path::new("paper")));
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let staging = staging_path(Path::new("/tmp/out/paper.json"));
        assert_eq!(staging, PathBuf::from("/tmp/out/paper.json.partial"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paper.json");
        let store = JsonDocumentStore::new().pretty();

        let doc = Document::from_texts(["Title", "Abstract"]);
        store.save(&doc, &path).unwrap();

        assert_eq!(store.load(&path).unwrap(), doc);
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_load_missing_file() {
        let store = JsonDocumentStore::new();
        let err = store.load(Path::new("/nonexistent/paper.json")).unwrap_err();
        assert!(matches!(err, VeilError::Load(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonDocumentStore::new().load(&path).unwrap_err();
        assert!(matches!(err, VeilError::Load(_)));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = JsonDocumentStore::new()
            .save(&Document::new(), &path)
            .unwrap_err();
        assert!(matches!(err, VeilError::Save(_)));
        assert!(!path.exists());
    }
}
