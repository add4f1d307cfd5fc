//! The catalog: record store plus the three indices, fed by one insertion stream.

use crate::index::{IndexKind, SurnameIndex};
use crate::store::RecordStore;
use crate::tree::{BalancedIndex, OrderedIndex};
use crate::unordered::UnorderedIndex;
use log::{debug, info};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::BTreeSet;
use std::sync::Arc;
use surdex_common::{CustomerId, Record};

/// Owns the record store and the three indices.
///
/// Every record passed to `insert` is appended to the store once and
/// inserted into each index once.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: RecordStore,
    unordered: UnorderedIndex,
    ordered: OrderedIndex,
    balanced: BalancedIndex,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record into the store and all three indices.
    pub fn insert(&mut self, record: Record) {
        self.unordered.insert(record.clone());
        self.ordered.insert(record.clone());
        self.balanced.insert(record.clone());
        self.store.insert(record);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn unordered(&self) -> &UnorderedIndex {
        &self.unordered
    }

    pub fn ordered(&self) -> &OrderedIndex {
        &self.ordered
    }

    pub fn balanced(&self) -> &BalancedIndex {
        &self.balanced
    }

    /// Returns the index of the given kind.
    pub fn index(&self, kind: IndexKind) -> &dyn SurnameIndex {
        match kind {
            IndexKind::Unordered => &self.unordered,
            IndexKind::Ordered => &self.ordered,
            IndexKind::Balanced => &self.balanced,
        }
    }

    /// All three indices in reporting order.
    pub fn indexes(&self) -> [&dyn SurnameIndex; 3] {
        IndexKind::ALL.map(|kind| self.index(kind))
    }

    /// Runs `search_all` against every index.
    pub fn search(&self, last_name: &str) -> SearchReport<'_> {
        let results = self
            .indexes()
            .into_iter()
            .map(|index| IndexMatches {
                kind: index.kind(),
                records: index.search_all(last_name),
            })
            .collect();

        SearchReport {
            last_name: last_name.to_string(),
            results,
        }
    }

    /// Tears down the store and every index.
    pub fn clear(&mut self) {
        let count = self.len();
        self.unordered.clear();
        self.ordered.clear();
        self.balanced.clear();
        self.store.clear();
        info!("Catalog torn down ({} records released)", count);
    }
}

impl Extend<Record> for Catalog {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

/// Matches returned by one index.
#[derive(Debug, Clone)]
pub struct IndexMatches<'a> {
    pub kind: IndexKind,
    pub records: Vec<&'a Record>,
}

impl IndexMatches<'_> {
    /// Number of matches.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Matching ids, sorted.
    pub fn customer_ids(&self) -> BTreeSet<CustomerId> {
        self.records.iter().map(|r| r.customer_id).collect()
    }
}

/// Per-index results of one surname lookup.
#[derive(Debug, Clone)]
pub struct SearchReport<'a> {
    /// The surname as entered.
    pub last_name: String,
    /// One entry per index, in `IndexKind::ALL` order.
    pub results: Vec<IndexMatches<'a>>,
}

impl<'a> SearchReport<'a> {
    /// Matches of the given index.
    pub fn matches(&self, kind: IndexKind) -> &[&'a Record] {
        self.results
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.records.as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if every index returned the same set of ids.
    pub fn indexes_agree(&self) -> bool {
        let mut sets = self.results.iter().map(|m| m.customer_ids());
        match sets.next() {
            Some(first) => sets.all(|set| set == first),
            None => true,
        }
    }
}

/// Catalog behind a reader-writer lock for multi-reader use.
///
/// Searches take the read lock, inserts take the write lock. Guards are
/// never held across I/O.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    /// Wraps an already populated catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Acquires a read guard.
    pub fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read()
    }

    /// Inserts a record under the write lock.
    pub fn insert(&self, record: Record) {
        self.inner.write().insert(record);
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Searches every index and returns owned copies of the matches.
    pub fn search_owned(&self, last_name: &str) -> Vec<(IndexKind, Vec<Record>)> {
        let catalog = self.inner.read();
        let report = catalog.search(last_name);
        debug!(
            "Shared search for {:?}: {:?}",
            last_name,
            report.results.iter().map(|m| m.count()).collect::<Vec<_>>()
        );
        report
            .results
            .into_iter()
            .map(|m| (m.kind, m.records.into_iter().cloned().collect()))
            .collect()
    }

    /// Tears down the shared catalog.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
