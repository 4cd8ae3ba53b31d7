use std::collections::HashSet;

use serde_json::{Map, Value};

use super::spec::{JobField, JobRecord, RawJob};
use crate::prelude::Result;

/// Parses a listing document into records without touching any store.
///
/// The document must be a JSON array whose elements are all objects.
pub fn parse_listings(text: &str) -> Result<Vec<JobRecord>> {
    let elements: Vec<Map<String, Value>> = serde_json::from_str(text)?;
    let records = elements
        .into_iter()
        .map(|obj| -> Result<JobRecord> {
            let raw: RawJob = serde_json::from_value(Value::Object(obj))?;
            Ok(JobRecord::from(raw))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(records)
}

/// The authoritative set of postings for the current session.
///
/// Contents are only ever replaced as a whole.
#[derive(Debug, Default, Clone)]
pub struct JobStore {
    records: Vec<JobRecord>,
}

impl JobStore {
    pub fn new() -> Self {
        JobStore::default()
    }

    pub fn load(&mut self, records: Vec<JobRecord>) {
        tracing::debug!("replacing {} stored jobs with {}", self.records.len(), records.len());
        self.records = records;
    }

    /// Parses `text` and swaps it in. On error the previous records stay.
    pub fn load_json(&mut self, text: &str) -> Result<usize> {
        let records = parse_listings(text)?;
        let count = records.len();
        self.load(records);
        Ok(count)
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of `field`, in order of first occurrence.
    pub fn distinct_values(&self, field: JobField) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|job| job.field(field))
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Error;

    const LISTINGS: &str = r#"[
        {"Title": "A", "Level": "Senior", "Type": "Remote", "Skill": "Rust"},
        {"Title": "B", "Level": "Junior", "Type": "Onsite", "Skill": "Rust"},
        {"Title": "C", "Level": "Senior", "Skill": "Go"},
        {"Title": "D"}
    ]"#;

    #[test]
    fn test_load_json_replaces_records() -> Result<()> {
        let mut store = JobStore::new();
        assert!(store.is_empty());
        assert_eq!(store.load_json(LISTINGS)?, 4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.load_json(r#"[{"Title": "Only"}]"#)?, 1);
        assert_eq!(store.records()[0].title, "Only");
        Ok(())
    }

    #[test]
    fn test_failed_load_keeps_previous_records() -> Result<()> {
        let mut store = JobStore::new();
        store.load_json(LISTINGS)?;
        for bad in ["not json", "{\"Title\": \"x\"}", "[1, 2]", "[[\"A\"]]", "[{}, null]", "\"text\""] {
            let err = store.load_json(bad).unwrap_err();
            assert!(matches!(err, Error::Malformed(_)), "{bad} gave {err}");
            assert_eq!(err.code(), "ERR-LOAD-001");
            assert_eq!(store.len(), 4);
            assert_eq!(store.records()[0].title, "A");
        }
        Ok(())
    }

    #[test]
    fn test_empty_array_loads_empty_store() -> Result<()> {
        let mut store = JobStore::new();
        store.load_json(LISTINGS)?;
        assert_eq!(store.load_json("[]")?, 0);
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn test_distinct_values_first_occurrence_order() -> Result<()> {
        let mut store = JobStore::new();
        store.load_json(LISTINGS)?;
        assert_eq!(
            store.distinct_values(JobField::Level),
            vec!["Senior", "Junior", "Unknown Level"]
        );
        assert_eq!(
            store.distinct_values(JobField::Type),
            vec!["Remote", "Onsite", "Unknown Type"]
        );
        assert_eq!(
            store.distinct_values(JobField::Skill),
            vec!["Rust", "Go", "Unknown Skill"]
        );
        Ok(())
    }

    #[test]
    fn test_distinct_values_of_empty_store() {
        let store = JobStore::new();
        assert!(store.distinct_values(JobField::Skill).is_empty());
    }
}
