//! Document model and storage
//!
//! The container format (DOCX or otherwise) is a collaborator of the
//! anonymization engine, not part of it. This module defines the
//! paragraph/run view the engine works on and the [`DocumentStore`] seam used
//! to load and save it.
//!
//! # Example
//!
//! ```no_run
//! use veil::document::{DocumentStore, JsonDocumentStore};
//! use std::path::Path;
//!
//! # fn example() -> veil::domain::Result<()> {
//! let store = JsonDocumentStore::new();
//! let doc = store.load(Path::new("paper.json"))?;
//! println!("{} paragraphs", doc.paragraph_count());
//! store.save(&doc, Path::new("paper_copy.json"))?;
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod store;

pub use model::{Document, Paragraph, Run, RunFormat};
pub use store::{DocumentStore, JsonDocumentStore};
