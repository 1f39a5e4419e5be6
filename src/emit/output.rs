//! Output File Handling
//!
//! The generated file is replaced in one step so a failed run never leaves
//! a half-written table behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::LoadError;

/// Write `contents` to `path` through a temp file in the same directory
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), LoadError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| LoadError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| LoadError::io(file.path(), e))?;
    file.persist(path).map_err(|e| LoadError::io(path, e.error))?;

    info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

/// Check whether `path` already holds exactly `contents`
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(existing) => Ok(existing == contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(LoadError::io(path, e)),
    }
}
