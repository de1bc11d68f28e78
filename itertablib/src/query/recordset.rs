//! Record set: records sorted and ready for table rendering.
//!
//! The data pipeline is:
//! 1. Source files (directory listing order)
//! 2. Records (one per file, same order)
//! 3. RecordSet (sorted by attack index)
//! 4. Table string (text or LaTeX)

use serde::Serialize;

use crate::data::Record;

/// Records ordered by ascending attack index.
///
/// The sort is stable, so records sharing an index keep their input order.
/// Records without an index (`-1`) come first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub records: Vec<Record>,
}

impl RecordSet {
    /// Sort a copy of `records`; the input is left untouched.
    pub fn from_records(records: &[Record]) -> Self {
        let mut records = records.to_vec();
        records.sort_by_key(|record| record.attack_index);
        RecordSet { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(set: &RecordSet) -> Vec<i64> {
        set.iter().map(|r| r.attack_index).collect()
    }

    #[test]
    fn test_sorted_ascending() {
        let records = vec![
            Record::new(10, 1),
            Record::new(2, 2),
            Record::new(7, 3),
        ];

        let set = RecordSet::from_records(&records);

        assert_eq!(indices(&set), vec![2, 7, 10]);
    }

    #[test]
    fn test_sort_is_numeric_not_lexicographic() {
        let records = vec![Record::new(10, 0), Record::new(9, 0), Record::new(100, 0)];
        let set = RecordSet::from_records(&records);
        assert_eq!(indices(&set), vec![9, 10, 100]);
    }

    #[test]
    fn test_missing_index_sorts_first() {
        let records = vec![
            Record::new(3, 1),
            Record::new(Record::NOT_FOUND, 2),
            Record::new(0, 3),
        ];

        let set = RecordSet::from_records(&records);

        assert_eq!(indices(&set), vec![-1, 0, 3]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let records = vec![
            Record::new(5, 100),
            Record::new(-1, 1),
            Record::new(5, 200),
            Record::new(-1, 2),
            Record::new(5, 300),
        ];

        let set = RecordSet::from_records(&records);

        assert_eq!(
            set.records,
            vec![
                Record::new(-1, 1),
                Record::new(-1, 2),
                Record::new(5, 100),
                Record::new(5, 200),
                Record::new(5, 300),
            ]
        );
    }

    #[test]
    fn test_input_left_unmodified() {
        let records = vec![Record::new(2, 0), Record::new(1, 0)];
        let _ = RecordSet::from_records(&records);
        assert_eq!(records, vec![Record::new(2, 0), Record::new(1, 0)]);
    }

    #[test]
    fn test_row_count_preserved() {
        let records: Vec<Record> = (0..25).rev().map(|i| Record::new(i % 4, i)).collect();
        let set = RecordSet::from_records(&records);
        assert_eq!(set.len(), records.len());
    }

    #[test]
    fn test_serializes_records_in_order() {
        let set = RecordSet::from_records(&[Record::new(4, 1), Record::new(-1, 2)]);
        let json = serde_json::to_value(&set).unwrap();

        assert_eq!(json["records"][0]["attack_index"], -1);
        assert_eq!(json["records"][1]["attack_index"], 4);
    }

    #[test]
    fn test_empty_set() {
        let set = RecordSet::from_records(&[]);
        assert!(set.is_empty());
    }
}
