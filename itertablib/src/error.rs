//! Error types for itertablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a table run.
///
/// Missing status markers and missing digit runs are not errors; they show up
/// as the `-1` sentinel in the affected record.
#[derive(Error, Debug)]
pub enum IterTableError {
    /// Directory does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path could not be inspected (e.g. an unsearchable parent directory)
    #[error("cannot access '{path}': {source}")]
    PathAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to list directory entries
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to read a result file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Table type selector is neither `text` nor `latex`
    #[error("incorrect table type '{0}'. Choose between 'text' or 'latex'.")]
    InvalidTableType(String),
}
