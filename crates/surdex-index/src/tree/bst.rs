//! Ordered index: an unbalanced binary search tree keyed by surname.

use super::arena::{BinaryNode, NodeArena, NodeId};
use super::traverse::{self, EqualKeys, InOrder};
use crate::index::{IndexKind, SurnameIndex};
use crate::key::{compare_names, names_equal};
use std::cmp::Ordering;
use surdex_common::{Record, Result};

#[derive(Debug, Clone)]
struct BstNode {
    record: Record,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl BinaryNode for BstNode {
    fn record(&self) -> &Record {
        &self.record
    }

    fn left(&self) -> Option<NodeId> {
        self.left
    }

    fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// Unbalanced BST. Keys strictly less than a node go left, equal or greater
/// go right. The shape is fixed by insertion order, so sorted input
/// degenerates into a right-leaning chain.
#[derive(Debug, Clone, Default)]
pub struct OrderedIndex {
    arena: NodeArena<BstNode>,
    root: Option<NodeId>,
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        traverse::height(&self.arena, self.root)
    }

    /// Verifies the ordering invariant over the whole tree.
    pub fn check_order(&self) -> Result<()> {
        traverse::check_order(&self.arena, self.root, EqualKeys::RightOnly).map(|_| ())
    }

    /// Ascending traversal.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        InOrder::new(&self.arena, self.root)
    }
}

impl SurnameIndex for OrderedIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Ordered
    }

    fn insert(&mut self, record: Record) {
        let node = self.arena.allocate(BstNode {
            record,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(node);
            return;
        };

        loop {
            let goes_left = compare_names(
                &self.arena.get(node).record.last_name,
                &self.arena.get(current).record.last_name,
            ) == Ordering::Less;

            let parent = self.arena.get_mut(current);
            let slot = if goes_left {
                &mut parent.left
            } else {
                &mut parent.right
            };
            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(node);
                    return;
                }
            }
        }
    }

    /// Full traversal with filter. Equal keys can sit anywhere below the
    /// first match's right branch, so every node is examined.
    fn search_all(&self, last_name: &str) -> Vec<&Record> {
        self.iter()
            .filter(|r| names_equal(&r.last_name, last_name))
            .collect()
    }

    fn find_first(&self, last_name: &str) -> Option<&Record> {
        traverse::descend_first(&self.arena, self.root, last_name)
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.iter())
    }

    fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(surnames: &[&str]) -> OrderedIndex {
        let mut index = OrderedIndex::new();
        for (i, name) in surnames.iter().enumerate() {
            index.insert(Record::new("X", *name, 1000 + i as i32));
        }
        index
    }

    #[test]
    fn test_empty_tree() {
        let index = OrderedIndex::new();
        assert_eq!(index.height(), 0);
        assert!(index.search_all("Lee").is_empty());
        assert!(index.find_first("Lee").is_none());
        assert!(index.check_order().is_ok());
    }

    #[test]
    fn test_sorted_input_degenerates_to_chain() {
        let index = build(&["Adams", "Baker", "Clark", "Davis", "Evans"]);
        assert_eq!(index.height(), 5);
        assert!(index.check_order().is_ok());
    }

    #[test]
    fn test_descending_input_degenerates_to_left_chain() {
        let index = build(&["Evans", "Davis", "Clark", "Baker", "Adams"]);
        assert_eq!(index.height(), 5);
        assert!(index.check_order().is_ok());
    }

    #[test]
    fn test_in_order_traversal_is_sorted() {
        let index = build(&["Miller", "brown", "Taylor", "Adams", "smith", "Lee"]);
        let names: Vec<&str> = index.iter().map(|r| r.last_name.as_str()).collect();
        assert_eq!(names, vec!["Adams", "brown", "Lee", "Miller", "smith", "Taylor"]);
    }

    #[test]
    fn test_duplicates_route_right_and_are_all_found() {
        // "lee" (1002) lands under "Park"'s left subtree, not directly under
        // the first "Lee", which is why search walks the whole tree.
        let index = build(&["Lee", "Park", "lee", "LEE", "Adams"]);
        assert!(index.check_order().is_ok());

        let mut ids: Vec<i32> = index
            .search_all("Lee")
            .iter()
            .map(|r| r.customer_id.0)
            .collect();
        ids.sort();
        assert_eq!(ids, vec![1000, 1002, 1003]);
    }

    #[test]
    fn test_find_first_descends_to_shallowest_match() {
        let index = build(&["Miller", "Lee", "Taylor", "lee"]);
        assert_eq!(index.find_first("LEE").unwrap().customer_id.0, 1001);
        assert!(index.find_first("Nguyen").is_none());
    }

    #[test]
    fn test_len_and_clear() {
        let mut index = build(&["Lee", "Park", "Adams"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.records().count(), 3);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
        assert_eq!(index.records().count(), 0);
    }
}
