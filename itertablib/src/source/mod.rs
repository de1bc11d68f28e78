//! Source discovery: list the result files to tabulate.
//!
//! This module handles the first stage of the pipeline. It lists every entry
//! directly inside the results directory, without recursion or extension
//! filtering, so that each entry produces exactly one table row.
//!
//! ## Example
//!
//! ```rust,ignore
//! use itertablib::source::list_directory;
//!
//! let files = list_directory("results/")?;
//! for file in &files {
//!     println!("{} -> {}", file.name, file.path.display());
//! }
//! ```

pub mod lister;

pub use lister::{ensure_trailing_separator, list_directory, SourceFile};
