//! Canonical record storage.

use surdex_common::{CustomerId, Record};

/// Owns the canonical copy of every record, in insertion order.
///
/// Positions map directly to `Vec` indices. Nothing is ever removed except
/// by `clear` at teardown.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records by insertion position.
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record. Ids are not checked for uniqueness.
    #[inline]
    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Iterates records in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Gets a record by insertion position.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest customer id held, if any.
    pub fn max_customer_id(&self) -> Option<CustomerId> {
        self.records.iter().map(|r| r.customer_id).max()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.records.shrink_to_fit();
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
