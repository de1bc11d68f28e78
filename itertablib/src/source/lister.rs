//! Directory listing for result files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::IterTableError;
use crate::Result;

/// A single entry of the results directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Entry name as it appears in the directory
    pub name: String,
    /// Directory path joined with the entry name
    pub path: PathBuf,
}

/// Make sure a directory path ends with the platform separator.
///
/// Entry names are appended to the result verbatim to build full paths.
pub fn ensure_trailing_separator(dir: &Path) -> PathBuf {
    let mut raw = dir.as_os_str().to_os_string();
    if !raw.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        raw.push(MAIN_SEPARATOR_STR);
    }
    PathBuf::from(raw)
}

/// List every entry directly inside `dir`.
///
/// No recursion and no filtering: subdirectories and files of any extension
/// are returned alike, in the order the filesystem yields them. A missing or
/// unreadable directory is an error.
pub fn list_directory(dir: impl AsRef<Path>) -> Result<Vec<SourceFile>> {
    let dir = dir.as_ref();

    let metadata = fs::metadata(dir).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IterTableError::PathNotFound(dir.to_path_buf()),
        _ => IterTableError::PathAccess {
            path: dir.to_path_buf(),
            source,
        },
    })?;
    if !metadata.is_dir() {
        return Err(IterTableError::NotADirectory(dir.to_path_buf()));
    }

    let root = ensure_trailing_separator(dir);
    let mut files = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| IterTableError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut full = root.as_os_str().to_os_string();
        full.push(entry.file_name());

        let file = SourceFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: PathBuf::from(full),
        };
        debug!(name = %file.name, "listed entry");
        files.push(file);
    }

    Ok(files)
}
