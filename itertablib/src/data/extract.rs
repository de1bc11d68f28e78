//! Attack index and iteration count extraction.
//!
//! Result files are expected to be named `*_<digits>.out` and to contain a
//! status line such as `[SUCCESS] Found preimage on iteration 42!` or
//! `[FAILURE] Preimage was not found in 100 iterations`. The count is searched
//! for only after the status marker so that numbers printed earlier in the log
//! (timings, hash sizes) are not picked up.
//!
//! When neither marker is present the whole text is searched instead, which
//! can pick up an unrelated number that happens to come first.

use std::fmt;
use std::fs;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::record::Record;
use crate::error::IterTableError;
use crate::source::SourceFile;
use crate::Result;

/// Status line token preceding the iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    /// `[SUCCESS]`
    Success,
    /// `[FAILURE]`
    Failure,
}

impl StatusMarker {
    /// Markers in search order.
    pub const ALL: [StatusMarker; 2] = [StatusMarker::Success, StatusMarker::Failure];

    /// Literal token as it appears in the log.
    pub fn token(self) -> &'static str {
        match self {
            StatusMarker::Success => "[SUCCESS]",
            StatusMarker::Failure => "[FAILURE]",
        }
    }
}

impl fmt::Display for StatusMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Iteration count parsed from file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationCount {
    /// Parsed count, or [`Record::NOT_FOUND`]
    pub value: i64,
    /// Marker the search started from; `None` means the whole text was searched
    pub marker: Option<StatusMarker>,
}

fn attack_index_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"_([0-9]+)\.out$").expect("attack index pattern is valid"))
}

fn digit_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"))
}

/// Parse an ASCII digit run, treating values beyond `i64` as absent.
fn parse_digits(digits: &str) -> Option<i64> {
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(digits, "number does not fit in a 64-bit integer");
            None
        }
    }
}

/// Extract the attack index from a file name ending in `_<digits>.out`.
///
/// Returns [`Record::NOT_FOUND`] for any other name.
pub fn parse_attack_index(file_name: &str) -> i64 {
    attack_index_pattern()
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| parse_digits(digits.as_str()))
        .unwrap_or(Record::NOT_FOUND)
}

/// Locate the first `[SUCCESS]`, falling back to the first `[FAILURE]`.
///
/// Returns the marker together with its byte offset.
pub fn find_status_marker(contents: &str) -> Option<(StatusMarker, usize)> {
    StatusMarker::ALL
        .into_iter()
        .find_map(|marker| contents.find(marker.token()).map(|pos| (marker, pos)))
}

/// Extract the iteration count: the first digit run at or after the status
/// marker, or anywhere in the text when there is no marker.
pub fn parse_iteration_count(contents: &str) -> IterationCount {
    let located = find_status_marker(contents);
    let start = located.map_or(0, |(_, pos)| pos);

    let value = digit_run_pattern()
        .find(&contents[start..])
        .and_then(|digits| parse_digits(digits.as_str()))
        .unwrap_or(Record::NOT_FOUND);

    IterationCount {
        value,
        marker: located.map(|(marker, _)| marker),
    }
}

/// Read one result file and build its record.
///
/// The file is read fully and closed before returning. A missing status
/// marker is logged and does not fail the call.
pub fn extract_record(file: &SourceFile) -> Result<Record> {
    let contents = fs::read_to_string(&file.path).map_err(|source| IterTableError::FileRead {
        path: file.path.clone(),
        source,
    })?;

    let attack_index = parse_attack_index(&file.name);
    let count = parse_iteration_count(&contents);

    if count.marker.is_none() {
        warn!(path = %file.path.display(), "iteration number not found");
    }

    let record = Record::new(attack_index, count.value);
    if !record.has_attack_index() {
        warn!(name = %file.name, "attack index not found in file name");
    }
    if !record.has_iteration_count() {
        debug!(path = %file.path.display(), "no digits after status marker");
    }
    debug!(
        name = %file.name,
        attack_index = record.attack_index,
        iteration_count = record.iteration_count,
        "extracted record"
    );

    Ok(record)
}

/// Build one record per file, in input order.
pub fn extract_records(files: &[SourceFile]) -> Result<Vec<Record>> {
    files.iter().map(extract_record).collect()
}
