//! Error types for notekeep

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for notekeep
#[derive(Debug, Error)]
pub enum NoteKeepError {
    /// Target suffix is neither `.txt` nor `.html`
    #[error("Unsupported format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// IO error on a specific file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<NoteKeepError>,
    },
}

impl NoteKeepError {
    /// Wrap an IO error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        NoteKeepError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        NoteKeepError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        match self {
            NoteKeepError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            NoteKeepError::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for NoteKeepError {
    fn from(err: toml::de::Error) -> Self {
        NoteKeepError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for NoteKeepError {
    fn from(err: toml::ser::Error) -> Self {
        NoteKeepError::Toml(err.to_string())
    }
}

/// Result type alias for notekeep
pub type Result<T> = std::result::Result<T, NoteKeepError>;
