use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, TranslateError};

/// Create a destination directory and its parents; existing directories are fine
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| TranslateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "ensured output directory");
    Ok(())
}

/// Write `content` to `path`, replacing any existing file atomically
///
/// Content is staged in a temp file next to the target and renamed over it,
/// so readers never observe a partially written document.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| TranslateError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staging = NamedTempFile::new_in(parent).map_err(write_err)?;
    staging.write_all(content.as_bytes()).map_err(write_err)?;
    staging.as_file().sync_all().map_err(write_err)?;
    staging.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}
