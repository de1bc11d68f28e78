//! Query processing: order records for presentation.
//!
//! This module handles the third stage of the pipeline. It turns the records
//! collected in filesystem order into a [`RecordSet`] sorted by attack index.
//!
//! ## Example
//!
//! ```rust
//! use itertablib::data::Record;
//! use itertablib::query::RecordSet;
//!
//! let set = RecordSet::from_records(&[Record::new(2, 10), Record::new(1, 30)]);
//! assert_eq!(set.records[0].attack_index, 1);
//! ```

pub mod recordset;

pub use recordset::RecordSet;
