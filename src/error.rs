//! Error types for plugin translation.
//!
//! Two tiers: `TranslateError` aborts the whole run, `SkipReason` only drops
//! the document it was raised for.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Fatal, process-wide failures. Each variant carries the path it failed on.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single document produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    #[error("no description")]
    MissingDescription,

    #[error("file name is not valid UTF-8")]
    InvalidFileName,
}
