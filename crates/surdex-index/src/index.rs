//! The surname index interface shared by all three structures.

use surdex_common::Record;

/// Identifies one of the three index structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexKind {
    /// Singly linked list, most recent record first.
    Unordered,
    /// Unbalanced binary search tree.
    Ordered,
    /// Red-black tree.
    Balanced,
}

impl IndexKind {
    /// All kinds, in reporting order.
    pub const ALL: [IndexKind; 3] = [IndexKind::Unordered, IndexKind::Ordered, IndexKind::Balanced];

    /// Short display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            IndexKind::Unordered => "Linked List",
            IndexKind::Ordered => "BST",
            IndexKind::Balanced => "RBT",
        }
    }
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for exact-match surname indices.
///
/// Insertion always succeeds and duplicate surnames coexist. Lookups compare
/// surnames case-insensitively (ASCII folding).
pub trait SurnameIndex: Send + Sync {
    /// Which structure this is.
    fn kind(&self) -> IndexKind;

    /// Adds a record.
    fn insert(&mut self, record: Record);

    /// Returns every record whose surname equals `last_name`.
    ///
    /// An absent surname yields an empty vector.
    fn search_all(&self, last_name: &str) -> Vec<&Record>;

    /// Returns one record whose surname equals `last_name`, if any.
    fn find_first(&self, last_name: &str) -> Option<&Record>;

    /// Number of records held.
    fn len(&self) -> usize;

    /// Returns true if no records are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full traversal of the structure.
    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_>;

    /// Drops every node.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_kind_names() {
        assert_eq!(IndexKind::Unordered.to_string(), "Linked List");
        assert_eq!(IndexKind::Ordered.to_string(), "BST");
        assert_eq!(IndexKind::Balanced.to_string(), "RBT");
    }

    #[test]
    fn test_index_kind_all_order() {
        assert_eq!(
            IndexKind::ALL,
            [IndexKind::Unordered, IndexKind::Ordered, IndexKind::Balanced]
        );
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn assert_object_safe(_: Option<&dyn SurnameIndex>) {}
        assert_object_safe(None);
    }
}
