//! Unordered index: a singly linked chain in reverse insertion order.

use crate::index::{IndexKind, SurnameIndex};
use crate::key::names_equal;
use crate::tree::arena::{NodeArena, NodeId};
use surdex_common::Record;

#[derive(Debug, Clone)]
struct ListNode {
    record: Record,
    /// Previously inserted node.
    next: Option<NodeId>,
}

/// Linked list index. Insert is an O(1) prepend; search is a linear scan
/// that finds the most recently inserted record first.
#[derive(Debug, Clone, Default)]
pub struct UnorderedIndex {
    arena: NodeArena<ListNode>,
    head: Option<NodeId>,
}

impl UnorderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates from the most recent record to the oldest.
    pub fn iter(&self) -> ListIter<'_> {
        ListIter {
            arena: &self.arena,
            cursor: self.head,
        }
    }
}

impl SurnameIndex for UnorderedIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Unordered
    }

    fn insert(&mut self, record: Record) {
        let node = self.arena.allocate(ListNode {
            record,
            next: self.head,
        });
        self.head = Some(node);
    }

    fn search_all(&self, last_name: &str) -> Vec<&Record> {
        self.iter()
            .filter(|r| names_equal(&r.last_name, last_name))
            .collect()
    }

    fn find_first(&self, last_name: &str) -> Option<&Record> {
        self.iter().find(|r| names_equal(&r.last_name, last_name))
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.iter())
    }

    fn clear(&mut self) {
        self.head = None;
        self.arena.clear();
    }
}

/// Walks the chain from the head.
pub struct ListIter<'a> {
    arena: &'a NodeArena<ListNode>,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.cursor?);
        self.cursor = node.next;
        Some(&node.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&Record]) -> Vec<i32> {
        records.iter().map(|r| r.customer_id.0).collect()
    }

    #[test]
    fn test_empty_index() {
        let index = UnorderedIndex::new();
        assert!(index.is_empty());
        assert!(index.search_all("Lee").is_empty());
        assert!(index.find_first("Lee").is_none());
        assert_eq!(index.records().count(), 0);
    }

    #[test]
    fn test_most_recent_first() {
        let mut index = UnorderedIndex::new();
        index.insert(Record::new("Ann", "Lee", 1000));
        index.insert(Record::new("Bob", "Park", 1001));
        index.insert(Record::new("Cid", "lee", 1002));

        let all: Vec<&Record> = index.records().collect();
        assert_eq!(ids(&all), vec![1002, 1001, 1000]);

        assert_eq!(ids(&index.search_all("LEE")), vec![1002, 1000]);
        assert_eq!(index.find_first("Lee").unwrap().customer_id.0, 1002);
    }

    #[test]
    fn test_absent_surname() {
        let mut index = UnorderedIndex::new();
        index.insert(Record::new("Ann", "Lee", 1000));
        assert!(index.search_all("Nguyen").is_empty());
        assert!(index.find_first("Nguyen").is_none());
    }

    #[test]
    fn test_clear() {
        let mut index = UnorderedIndex::new();
        index.insert(Record::new("Ann", "Lee", 1000));
        index.clear();
        assert_eq!(index.len(), 0);
        assert!(index.search_all("Lee").is_empty());

        index.insert(Record::new("Bob", "Lee", 1001));
        assert_eq!(ids(&index.search_all("lee")), vec![1001]);
    }
}
