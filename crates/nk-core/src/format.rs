//! Export target formats

use crate::error::{NoteKeepError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Representation written for an export target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Unformatted text (`.txt`)
    PlainText,
    /// Formatted text as HTML (`.html`)
    Markup,
}

impl ExportFormat {
    /// Every supported format
    pub const ALL: [ExportFormat; 2] = [ExportFormat::PlainText, ExportFormat::Markup];

    /// Pick the format from the suffix of a target path's file name
    ///
    /// Matching is exact and case-sensitive: `notes.TXT` is unsupported,
    /// while a file named just `.txt` is plain text.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.ends_with(".txt") {
            Ok(ExportFormat::PlainText)
        } else if name.ends_with(".html") {
            Ok(ExportFormat::Markup)
        } else {
            Err(NoteKeepError::UnsupportedFormat(path.to_path_buf()))
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "txt",
            ExportFormat::Markup => "html",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::PlainText => "plain text",
            ExportFormat::Markup => "HTML",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = NoteKeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" | "plain" => Ok(ExportFormat::PlainText),
            "html" | "markup" => Ok(ExportFormat::Markup),
            other => Err(NoteKeepError::Validation(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_recognized() {
        assert_eq!(
            ExportFormat::from_path(Path::new("notes.txt")).unwrap(),
            ExportFormat::PlainText
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("/tmp/dir.v2/notes.html")).unwrap(),
            ExportFormat::Markup
        );
    }

    #[test]
    fn test_from_path_bare_suffix_names() {
        assert_eq!(
            ExportFormat::from_path(Path::new("dir/.txt")).unwrap(),
            ExportFormat::PlainText
        );
        assert_eq!(
            ExportFormat::from_path(Path::new(".html")).unwrap(),
            ExportFormat::Markup
        );
    }

    #[test]
    fn test_from_path_rejects_others() {
        let rejected = [
            "notes.pdf",
            "notes",
            "notes.TXT",
            "notes.htm",
            "notes.txt.bak",
            "txt",
            "notes.txt/..",
        ];
        for path in rejected {
            let err = ExportFormat::from_path(Path::new(path)).unwrap_err();
            match err {
                NoteKeepError::UnsupportedFormat(p) => assert_eq!(p, Path::new(path)),
                other => panic!("unexpected error for {}: {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::PlainText);
        assert_eq!("markup".parse::<ExportFormat>().unwrap(), ExportFormat::Markup);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_display_matches_extension() {
        for format in ExportFormat::ALL {
            assert_eq!(format.to_string(), format.extension());
        }
    }
}
