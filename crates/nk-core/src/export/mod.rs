//! Content export
//!
//! This module writes a [`TextBuffer`](crate::buffer::TextBuffer) to a file
//! whose extension picks the representation:
//! - `.txt` receives the plain-text projection
//! - `.html` receives the markup projection
//!
//! Any other extension is rejected before the filesystem is touched.
//!
//! # Example
//!
//! ```ignore
//! use nk_core::{ContentExporter, Document};
//!
//! let exporter = ContentExporter::new();
//! let doc = Document::plain("Hello, world!");
//! exporter.export(&doc, Path::new("notes.txt"))?;
//! ```

mod exporter;
mod strategy;

pub use exporter::{ContentExporter, ExportSummary, WriteMode};
pub use strategy::ExportStrategy;
