//! nk-core - Core library for notekeep
//!
//! This crate provides the text buffer abstraction, the content exporter
//! that writes a buffer as plain text or HTML, find-all search, the daily
//! plan model and configuration.

pub mod atomic;
pub mod buffer;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod markup;
pub mod plan;
pub mod search;

pub use buffer::{Document, TextBuffer};
pub use error::{NoteKeepError, Result};
pub use export::{ContentExporter, ExportStrategy, ExportSummary, WriteMode};
pub use format::ExportFormat;
