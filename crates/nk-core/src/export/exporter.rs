//! Content exporter

use super::strategy::ExportStrategy;
use crate::atomic::write_atomic;
use crate::buffer::TextBuffer;
use crate::config::ExportConfig;
use crate::error::{NoteKeepError, Result};
use crate::format::ExportFormat;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the target file is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a uniquely named sibling temp file, then rename it over the
    /// target. The target is either fully replaced or left untouched.
    #[default]
    Atomic,
    /// Truncate and write the target in place. A failed write may leave
    /// a partial file behind.
    Direct,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// File that was written
    pub path: PathBuf,
    /// Representation written
    pub format: ExportFormat,
    /// Bytes written
    pub bytes: usize,
}

/// Writes a text buffer to a `.txt` or `.html` file
///
/// The exporter holds only write options. Each call reads the buffer once
/// and writes one file; nothing is retained between calls and no locking is
/// done, so concurrent exports to the same path must be serialized by the
/// caller.
#[derive(Debug, Clone, Default)]
pub struct ContentExporter {
    write_mode: WriteMode,
    create_parent_dirs: bool,
}

impl ContentExporter {
    /// Create an exporter with atomic writes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter from configuration
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            write_mode: if config.atomic_write {
                WriteMode::Atomic
            } else {
                WriteMode::Direct
            },
            create_parent_dirs: config.create_parent_dirs,
        }
    }

    /// Set the write mode
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Set whether missing parent directories are created
    pub fn with_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Current write mode
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Export the buffer to `path`, choosing the representation by extension
    pub fn export(&self, buffer: &dyn TextBuffer, path: &Path) -> Result<ExportSummary> {
        // Reject before any read or write
        let strategy = ExportStrategy::for_path(path)?;
        let content = strategy.extract(buffer);

        if self.create_parent_dirs {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| NoteKeepError::io(parent, e))?;
                    debug!("Created parent directory {:?}", parent);
                }
            }
        }

        match self.write_mode {
            WriteMode::Atomic => write_atomic(path, content.as_bytes())?,
            WriteMode::Direct => write_direct(path, content.as_bytes())?,
        }

        debug!(
            "Exported {} bytes as {} to {:?}",
            content.len(),
            strategy.format().name(),
            path
        );

        Ok(ExportSummary {
            path: path.to_path_buf(),
            format: strategy.format(),
            bytes: content.len(),
        })
    }

    /// Render the buffer in a format without writing anything
    pub fn render(&self, buffer: &dyn TextBuffer, format: ExportFormat) -> String {
        ExportStrategy::for_format(format).extract(buffer)
    }
}

fn write_direct(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| NoteKeepError::io(path, e))?;
    file.write_all(content)
        .and_then(|_| file.flush())
        .map_err(|e| NoteKeepError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Document;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Buffer with independent plain and markup projections
    struct FixedBuffer {
        plain: &'static str,
        markup: &'static str,
    }

    impl TextBuffer for FixedBuffer {
        fn plain_text(&self) -> String {
            self.plain.to_string()
        }

        fn markup_text(&self) -> String {
            self.markup.to_string()
        }
    }

    fn hello() -> FixedBuffer {
        FixedBuffer {
            plain: "Hello, world!",
            markup: "<b>Hello</b>",
        }
    }

    #[test]
    fn test_export_txt_writes_plain_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");

        let summary = ContentExporter::new().export(&hello(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello, world!");
        assert_eq!(summary.format, ExportFormat::PlainText);
        assert_eq!(summary.bytes, 13);
        assert_eq!(summary.path, path);
    }

    #[test]
    fn test_export_html_writes_markup() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.html");

        let summary = ContentExporter::new().export(&hello(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<b>Hello</b>");
        assert_eq!(summary.format, ExportFormat::Markup);
    }

    #[test]
    fn test_export_unicode_is_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("unicode.txt");
        let doc = Document::plain("naïve café ✓ 日本");

        ContentExporter::new().export(&doc, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), "naïve café ✓ 日本".as_bytes());
    }

    #[test]
    fn test_export_empty_buffer() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");

        let summary = ContentExporter::new().export(&Document::new(), &path).unwrap();

        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        assert_eq!(summary.bytes, 0);
    }

    #[test]
    fn test_unsupported_format_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.pdf");

        let err = ContentExporter::new().export(&hello(), &path).unwrap_err();

        assert!(matches!(err, NoteKeepError::UnsupportedFormat(ref p) if p == &path));
        assert!(!path.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unsupported_format_leaves_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes");
        fs::write(&path, "keep me").unwrap();

        let err = ContentExporter::new().export(&hello(), &path).unwrap_err();

        assert!(matches!(err, NoteKeepError::UnsupportedFormat(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_export_overwrites_not_appends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        let exporter = ContentExporter::new();

        exporter.export(&hello(), &path).unwrap();
        let first = fs::read(&path).unwrap();
        exporter.export(&hello(), &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, b"Hello, world!");
    }

    #[test]
    fn test_export_replaces_longer_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "a much longer previous body of text").unwrap();

        for mode in [WriteMode::Atomic, WriteMode::Direct] {
            ContentExporter::new()
                .with_write_mode(mode)
                .export(&Document::plain("short"), &path)
                .unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "short");
        }
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.html");

        ContentExporter::new().export(&hello(), &path).unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_parent_is_io_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("notes.txt");

        for mode in [WriteMode::Atomic, WriteMode::Direct] {
            let err = ContentExporter::new()
                .with_write_mode(mode)
                .export(&hello(), &path)
                .unwrap_err();

            match err {
                NoteKeepError::Io { path: p, source } => {
                    assert_eq!(p, path);
                    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_target_is_directory_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folder.txt");
        fs::create_dir(&path).unwrap();

        let err = ContentExporter::new().export(&hello(), &path).unwrap_err();

        assert!(matches!(err, NoteKeepError::Io { .. }));
        assert!(path.is_dir());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_keeps_unrelated_temp_named_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        let neighbour = temp.path().join(".notes.txt.tmp");
        fs::write(&neighbour, "user data").unwrap();

        ContentExporter::new().export(&hello(), &path).unwrap();

        assert_eq!(fs::read_to_string(&neighbour).unwrap(), "user data");
        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello, world!");
    }

    #[cfg(unix)]
    #[test]
    fn test_export_through_symlink_updates_real_file() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.txt");
        let link = temp.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        for mode in [WriteMode::Atomic, WriteMode::Direct] {
            fs::write(&real, "old").unwrap();
            ContentExporter::new()
                .with_write_mode(mode)
                .export(&Document::plain("new"), &link)
                .unwrap();

            assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
            assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        }
    }

    #[test]
    fn test_export_to_dotfile_named_by_suffix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".txt");

        let summary = ContentExporter::new().export(&Document::plain("hi"), &path).unwrap();

        assert_eq!(summary.format, ExportFormat::PlainText);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hi");
    }

    #[test]
    fn test_create_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("notes.txt");

        ContentExporter::new()
            .with_parent_dirs(true)
            .export(&hello(), &path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Hello, world!");
    }

    #[test]
    fn test_from_config() {
        let config = ExportConfig {
            atomic_write: false,
            create_parent_dirs: true,
        };
        let exporter = ContentExporter::from_config(&config);
        assert_eq!(exporter.write_mode(), WriteMode::Direct);

        let exporter = ContentExporter::from_config(&ExportConfig::default());
        assert_eq!(exporter.write_mode(), WriteMode::Atomic);
    }

    #[test]
    fn test_render() {
        let exporter = ContentExporter::new();
        assert_eq!(exporter.render(&hello(), ExportFormat::PlainText), "Hello, world!");
        assert_eq!(exporter.render(&hello(), ExportFormat::Markup), "<b>Hello</b>");
    }
}
