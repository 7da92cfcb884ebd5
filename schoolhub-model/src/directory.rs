//! The record collection a single page owns.
//!
//! One browsing context holds exactly one `Directory`; cross-context
//! notifications carry copies of record data, never references into it.

use crate::record::{Category, SchoolRecord};
use schoolhub_types::RecordId;
use std::collections::{BTreeMap, HashSet};

/// An ordered record collection with unique identifiers.
///
/// Insertion order is presentation order. Duplicate IDs are structurally
/// impossible: inserts of an already-present ID are rejected, which is what
/// makes double-delivered add notifications a no-op downstream.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<SchoolRecord>,
    ids: HashSet<RecordId>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a record sequence, preserving order.
    ///
    /// When two records share an ID, the first occurrence wins and later
    /// ones are dropped.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = SchoolRecord>) -> Self {
        let mut directory = Self::new();
        for record in records {
            directory.push_back(record);
        }
        directory
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record with this ID is present.
    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Looks a record up by ID.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&SchoolRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// The records, in presentation order.
    #[must_use]
    pub fn records(&self) -> &[SchoolRecord] {
        &self.records
    }

    /// Iterates the records in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &SchoolRecord> {
        self.records.iter()
    }

    /// Appends a record. Returns false (and drops the record) when its ID
    /// is already present.
    pub fn push_back(&mut self, record: SchoolRecord) -> bool {
        if !self.ids.insert(record.id) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Prepends a record for most-recent-first presentation. Returns false
    /// (and drops the record) when its ID is already present.
    pub fn insert_front(&mut self, record: SchoolRecord) -> bool {
        if !self.ids.insert(record.id) {
            return false;
        }
        self.records.insert(0, record);
        true
    }

    /// Replaces a record in place, preserving its position. Returns false
    /// when no record with that ID exists.
    pub fn replace(&mut self, record: SchoolRecord) -> bool {
        match self.records.iter_mut().find(|slot| slot.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Replaces in place when present, prepends otherwise. Returns true
    /// when the record was newly inserted.
    pub fn upsert_front(&mut self, record: SchoolRecord) -> bool {
        if self.replace(record.clone()) {
            return false;
        }
        self.insert_front(record)
    }

    /// Removes a record by ID, returning it when present.
    pub fn remove(&mut self, id: &RecordId) -> Option<SchoolRecord> {
        if !self.ids.remove(id) {
            return None;
        }
        let index = self.records.iter().position(|record| record.id == *id)?;
        Some(self.records.remove(index))
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    /// Aggregates for the admin dashboard header.
    #[must_use]
    pub fn stats(&self) -> DirectoryStats {
        let mut cities = HashSet::new();
        let mut by_category: BTreeMap<Category, usize> = BTreeMap::new();
        let mut students: u64 = 0;

        for record in &self.records {
            students += u64::from(record.students);
            // "Nairobi, Kenya" counts as the city "Nairobi".
            let city = record
                .location
                .split(',')
                .next()
                .unwrap_or("")
                .trim()
                .to_owned();
            cities.insert(city);
            *by_category.entry(record.category.clone()).or_default() += 1;
        }

        DirectoryStats {
            schools: self.records.len(),
            students,
            locations: cities.len(),
            by_category,
        }
    }
}

/// Aggregate counts over one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Total records.
    pub schools: usize,
    /// Sum of student counts.
    pub students: u64,
    /// Distinct cities (first comma-separated token of each location).
    pub locations: usize,
    /// Record count per category tag.
    pub by_category: BTreeMap<Category, usize>,
}
