//! Export strategies

use crate::buffer::TextBuffer;
use crate::error::Result;
use crate::format::ExportFormat;
use std::path::Path;

/// Which projection of the buffer gets written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStrategy {
    /// Write `plain_text()`
    PlainTextExport,
    /// Write `markup_text()`
    MarkupExport,
}

impl ExportStrategy {
    /// Select the strategy for a target path
    pub fn for_path(path: &Path) -> Result<Self> {
        ExportFormat::from_path(path).map(Self::for_format)
    }

    /// Select the strategy for a format
    pub fn for_format(format: ExportFormat) -> Self {
        match format {
            ExportFormat::PlainText => ExportStrategy::PlainTextExport,
            ExportFormat::Markup => ExportStrategy::MarkupExport,
        }
    }

    /// The format this strategy writes
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportStrategy::PlainTextExport => ExportFormat::PlainText,
            ExportStrategy::MarkupExport => ExportFormat::Markup,
        }
    }

    /// Read the matching projection from the buffer
    pub fn extract(&self, buffer: &dyn TextBuffer) -> String {
        match self {
            ExportStrategy::PlainTextExport => buffer.plain_text(),
            ExportStrategy::MarkupExport => buffer.markup_text(),
        }
    }
}
