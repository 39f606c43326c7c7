//! Configuration management for notekeep

use crate::error::{NoteKeepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportConfig,
    /// Search settings
    pub search: SearchConfig,
    /// Daily planner settings
    pub planner: PlannerConfig,
}

impl Config {
    /// Parse configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| NoteKeepError::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| {
            NoteKeepError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) if e.is_not_found() => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Write through a temp file and rename
    pub atomic_write: bool,
    /// Create missing parent directories of the target
    pub create_parent_dirs: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            atomic_write: true,
            create_parent_dirs: false,
        }
    }
}

/// Search-related configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Match case when finding text
    pub case_sensitive: bool,
}

/// Daily planner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Plan file; the platform data directory is used when unset
    pub file: Option<PathBuf>,
}
