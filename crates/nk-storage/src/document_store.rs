//! Opening note files

use nk_core::error::{NoteKeepError, Result};
use nk_core::{Document, ExportFormat};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Open a `.txt` or `.html` note as a document
///
/// Text files become plain documents and HTML files keep their markup.
pub fn open_document(path: &Path) -> Result<Document> {
    let format = ExportFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| NoteKeepError::io(path, e))?;

    debug!("Opened {:?} ({} bytes, {})", path, content.len(), format.name());

    Ok(match format {
        ExportFormat::PlainText => Document::plain(content),
        ExportFormat::Markup => Document::from_markup(content),
    })
}
