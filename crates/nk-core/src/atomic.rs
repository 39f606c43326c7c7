//! Atomic file replacement
//!
//! Content goes to a uniquely named temp file next to the target, is synced,
//! and is then renamed over the target. A failed write leaves the target as
//! it was and removes the temp file. Symlinked targets are written through:
//! the file the link points at is replaced and the link itself is kept.

use crate::error::{NoteKeepError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replace the file at `path` with `content`
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path).map_err(|e| NoteKeepError::io(path, e))?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| NoteKeepError::io(path, e))?;
    temp.write_all(content)
        .and_then(|_| temp.flush())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| NoteKeepError::io(path, e))?;

    // Keep the mode of a file being replaced
    if let Ok(meta) = fs::metadata(&target) {
        if meta.is_file() {
            temp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| NoteKeepError::io(path, e))?;
        }
    }

    // Rename to final path (atomic on most filesystems); the temp file is
    // deleted when the persist error is dropped
    temp.persist(&target)
        .map_err(|e| NoteKeepError::io(path, e.error))?;
    Ok(())
}

/// The file a write to `path` should replace
///
/// Symlinks are followed, including dangling ones, so the link survives.
fn resolve_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(real) => Ok(real),
            Err(_) => {
                let link = fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            }
        },
        _ => Ok(path.to_path_buf()),
    }
}
