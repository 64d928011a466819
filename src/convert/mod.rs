//! Conversion driver - walks the source directories and translates each
//! document into the destination tree.

pub mod document;
pub mod kind;
pub mod report;

pub use document::translate_document;
pub use kind::{DocumentKind, DOCUMENT_EXTENSION};
pub use report::{ConversionReport, Outcome, ReportSummary};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SkipReason, TranslateError};
use crate::output::{ensure_dir, write_atomic};
use crate::paths::TranslatePaths;

/// Knobs for a single run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Translate and report, but touch nothing on disk
    pub dry_run: bool,
}

/// Translate the commands and agents directories of a plugin
///
/// Destination directories are created first, then commands and agents are
/// processed in that order. Documents without a description are recorded as
/// skipped; any I/O failure aborts the run.
pub fn run(paths: &TranslatePaths, options: RunOptions) -> Result<ConversionReport> {
    if !options.dry_run {
        ensure_dir(&paths.commands_out)?;
        ensure_dir(&paths.agents_out)?;
    }

    let mut report = ConversionReport::new(options.dry_run);

    for (kind, src, out) in [
        (DocumentKind::Command, &paths.commands_src, &paths.commands_out),
        (DocumentKind::Agent, &paths.agents_src, &paths.agents_out),
    ] {
        for source in list_documents(src)? {
            let outcome = convert_file(kind, &source, out, options)?;
            report.push(outcome);
        }
    }

    Ok(report)
}

/// Translate a single source file and, unless dry-running, write the result
pub fn convert_file(
    kind: DocumentKind,
    source: &Path,
    out_dir: &Path,
    options: RunOptions,
) -> Result<Outcome> {
    let name = match logical_name(source) {
        Some(name) => name,
        None => {
            let reason = SkipReason::InvalidFileName;
            debug!(path = %source.display(), %reason, "skipping document");
            let name = source
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            return Ok(Outcome::Skipped { kind, name, reason });
        }
    };

    // Undecodable bytes become U+FFFD; only real I/O failures are fatal.
    let bytes = fs::read(source).map_err(|e| TranslateError::ReadFile {
        path: source.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    debug!(path = %source.display(), %kind, "read source document");

    let document = match translate_document(kind, &content) {
        Ok(document) => document,
        Err(reason) => {
            debug!(path = %source.display(), %reason, "skipping document");
            return Ok(Outcome::Skipped { kind, name, reason });
        }
    };

    let output = out_dir.join(kind.output_file_name(&name));
    if !options.dry_run {
        write_atomic(&output, &document.to_markdown())?;
    }

    Ok(Outcome::Converted { kind, name, output })
}

/// Documents in `dir`, sorted by file name
///
/// Only regular files with the document extension are returned.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source: std::io::Error| TranslateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION) {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

/// File name without its extension, if it is valid UTF-8
fn logical_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}
