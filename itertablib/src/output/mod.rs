//! Output formatting: present records as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! rendering a sorted [`RecordSet`](crate::query::RecordSet) as a string:
//!
//! - **Text**: `att<TAB>iter` header plus one tab-separated line per record
//! - **LaTeX**: a bordered two-column `tabular` inside `center`, with
//!   Ukrainian column headers
//!
//! ## Example
//!
//! ```rust
//! use itertablib::data::Record;
//! use itertablib::output::TableFormat;
//! use itertablib::query::RecordSet;
//!
//! let set = RecordSet::from_records(&[Record::new(3, 42)]);
//! let format: TableFormat = "text".parse().unwrap();
//! assert_eq!(format.render(&set), "att\titer\n3\t42\n");
//! ```

pub mod table;

pub use table::{render_latex, render_text, TableFormat};
