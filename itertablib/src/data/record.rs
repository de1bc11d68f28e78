//! The record extracted from one result file.

use serde::Serialize;

/// One table row: the attack index and its iteration count.
///
/// Both fields use `-1` ([`Record::NOT_FOUND`]) when the value could not be
/// recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Index parsed from the `_<digits>.out` file name suffix
    pub attack_index: i64,
    /// First digit run after the status marker in the file contents
    pub iteration_count: i64,
}

impl Record {
    /// Sentinel for a field that could not be parsed.
    pub const NOT_FOUND: i64 = -1;

    pub fn new(attack_index: i64, iteration_count: i64) -> Self {
        Self {
            attack_index,
            iteration_count,
        }
    }

    /// Whether the file name carried an attack index.
    pub fn has_attack_index(&self) -> bool {
        self.attack_index != Self::NOT_FOUND
    }

    /// Whether the file contents carried an iteration count.
    pub fn has_iteration_count(&self) -> bool {
        self.iteration_count != Self::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields() {
        let record = Record::new(3, 42);
        assert_eq!(record.attack_index, 3);
        assert_eq!(record.iteration_count, 42);
        assert!(record.has_attack_index());
        assert!(record.has_iteration_count());
    }

    #[test]
    fn test_record_sentinels() {
        let record = Record::new(Record::NOT_FOUND, 99);
        assert!(!record.has_attack_index());
        assert!(record.has_iteration_count());

        let record = Record::new(7, Record::NOT_FOUND);
        assert!(record.has_attack_index());
        assert!(!record.has_iteration_count());
    }

    #[test]
    fn test_record_serializes_both_fields() {
        let json = serde_json::to_value(Record::new(-1, 5)).unwrap();
        assert_eq!(json["attack_index"], -1);
        assert_eq!(json["iteration_count"], 5);
    }
}
