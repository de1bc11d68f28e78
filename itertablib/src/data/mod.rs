//! Data collection: turn result files into records.
//!
//! This module handles the second stage of the pipeline. For every listed
//! entry it reads the file and extracts:
//!
//! - **Attack index**: the digit run in a `_<digits>.out` file name suffix
//! - **Iteration count**: the first digit run after the `[SUCCESS]` or
//!   `[FAILURE]` status marker
//!
//! Either field falls back to `-1` ([`Record::NOT_FOUND`]) when nothing
//! matches, so no entry is ever dropped from the report.
//!
//! ## Example
//!
//! ```rust
//! use itertablib::data::{parse_attack_index, parse_iteration_count};
//!
//! assert_eq!(parse_attack_index("run_3.out"), 3);
//! assert_eq!(parse_iteration_count("[SUCCESS] done in 42 steps").value, 42);
//! ```

pub mod extract;
pub mod record;

pub use extract::{
    extract_record, extract_records, find_status_marker, parse_attack_index,
    parse_iteration_count, IterationCount, StatusMarker,
};
pub use record::Record;
