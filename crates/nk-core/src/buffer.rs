//! Text buffer abstraction
//!
//! A [`TextBuffer`] exposes two read projections of its current content:
//! plain text and markup. The exporter only ever reads through this trait,
//! so any editor component can hand itself over for the duration of a call.

use crate::markup;

/// Read projections of a live text buffer
pub trait TextBuffer {
    /// Content with all formatting stripped
    fn plain_text(&self) -> String;

    /// Content with formatting preserved as markup
    fn markup_text(&self) -> String;
}

/// Where a document's content came from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Plain(String),
    Markup(String),
}

/// In-memory note document
///
/// A document is either plain-sourced (typed or loaded from `.txt`) or
/// markup-sourced (loaded from `.html`). The source form is returned as-is
/// from its own projection; the other projection is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source: Source,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::plain("")
    }

    /// Create a document from plain text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            source: Source::Plain(text.into()),
        }
    }

    /// Create a document from markup
    pub fn from_markup(html: impl Into<String>) -> Self {
        Self {
            source: Source::Markup(html.into()),
        }
    }

    /// Replace the content with plain text
    pub fn set_plain(&mut self, text: impl Into<String>) {
        self.source = Source::Plain(text.into());
    }

    /// Replace the content with markup
    pub fn set_markup(&mut self, html: impl Into<String>) {
        self.source = Source::Markup(html.into());
    }

    /// Whether the document holds formatted content
    pub fn is_rich(&self) -> bool {
        matches!(self.source, Source::Markup(_))
    }

    /// Whether the document has no visible text
    pub fn is_empty(&self) -> bool {
        match &self.source {
            Source::Plain(text) => text.is_empty(),
            Source::Markup(_) => self.plain_text().is_empty(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for Document {
    fn plain_text(&self) -> String {
        match &self.source {
            Source::Plain(text) => text.clone(),
            Source::Markup(html) => markup::to_plain(html),
        }
    }

    fn markup_text(&self) -> String {
        match &self.source {
            Source::Plain(text) => markup::render_document(text),
            Source::Markup(html) => html.clone(),
        }
    }
}

impl<T: TextBuffer + ?Sized> TextBuffer for &T {
    fn plain_text(&self) -> String {
        (**self).plain_text()
    }

    fn markup_text(&self) -> String {
        (**self).markup_text()
    }
}
