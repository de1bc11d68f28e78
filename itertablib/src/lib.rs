//! # itertablib
//!
//! Collect iteration counts from a directory of attack result logs and render
//! them as a text or LaTeX table.
//!
//! ## Overview
//!
//! Each attack run writes one `*_<N>.out` log whose status line reads like
//! `[SUCCESS] Found preimage on iteration 42!` or
//! `[FAILURE] Preimage was not found in 100 iterations`. This library turns a
//! directory of such logs into one table row per file:
//!
//! 1. **source**: list the directory entries
//! 2. **data**: extract the attack index (file name) and iteration count
//!    (file contents) into a [`Record`]
//! 3. **query**: sort records by attack index into a [`RecordSet`]
//! 4. **output**: render the set with a [`TableFormat`]
//!
//! Values that cannot be recovered become `-1`; rows are never dropped.
//!
//! ## Example
//!
//! ```rust
//! use itertablib::{build_table, TableFormat};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("run_3.out"), "[SUCCESS] done in 42 steps").unwrap();
//! fs::write(dir.path().join("run_7.out"), "[FAILURE] aborted after 5 retries").unwrap();
//!
//! let table = build_table(dir.path(), TableFormat::Text).unwrap();
//! assert_eq!(table, "att\titer\n3\t42\n7\t5\n");
//! ```

use std::path::Path;

use tracing::debug;

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    extract_record, extract_records, parse_attack_index, parse_iteration_count, IterationCount,
    Record, StatusMarker,
};
pub use error::IterTableError;
pub use output::{render_latex, render_text, TableFormat};
pub use query::RecordSet;
pub use source::{list_directory, SourceFile};

/// Result type for itertablib operations
pub type Result<T> = std::result::Result<T, IterTableError>;

/// List `dir`, extract one record per entry and sort them by attack index.
pub fn collect_records(dir: impl AsRef<Path>) -> Result<RecordSet> {
    let dir = dir.as_ref();
    let files = list_directory(dir)?;
    let records = extract_records(&files)?;
    let set = RecordSet::from_records(&records);

    if set.is_empty() {
        debug!(dir = %dir.display(), "no result files, table has no rows");
    } else {
        debug!(rows = set.len(), "collected records");
    }

    Ok(set)
}

/// Run the whole pipeline and render the table for `dir`.
pub fn build_table(dir: impl AsRef<Path>, format: TableFormat) -> Result<String> {
    let records = collect_records(dir)?;
    Ok(format.render(&records))
}
