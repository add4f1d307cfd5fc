//! Iterative traversals shared by the ordered and balanced indices.
//!
//! Everything here uses explicit stacks, so an unbalanced tree of any depth
//! can be walked without growing the call stack.

use super::arena::{BinaryNode, NodeArena, NodeId};
use crate::key::compare_names;
use std::cmp::Ordering;
use surdex_common::{Record, Result, SurdexError};

/// In-order (ascending surname) iterator.
pub(crate) struct InOrder<'a, N> {
    arena: &'a NodeArena<N>,
    stack: Vec<NodeId>,
}

impl<'a, N: BinaryNode> InOrder<'a, N> {
    pub(crate) fn new(arena: &'a NodeArena<N>, root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.arena.get(id).left();
        }
    }
}

impl<'a, N: BinaryNode> Iterator for InOrder<'a, N> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.arena.get(id);
        self.push_left_spine(node.right());
        Some(node.record())
    }
}

/// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
pub(crate) fn height<N: BinaryNode>(arena: &NodeArena<N>, root: Option<NodeId>) -> usize {
    let mut max_depth = 0;
    let mut stack: Vec<(NodeId, usize)> = root.map(|id| (id, 1)).into_iter().collect();

    while let Some((id, depth)) = stack.pop() {
        max_depth = max_depth.max(depth);
        let node = arena.get(id);
        if let Some(left) = node.left() {
            stack.push((left, depth + 1));
        }
        if let Some(right) = node.right() {
            stack.push((right, depth + 1));
        }
    }

    max_depth
}

/// Descends from the root and stops at the first node whose surname equals `key`.
pub(crate) fn descend_first<'a, N: BinaryNode>(
    arena: &'a NodeArena<N>,
    root: Option<NodeId>,
    key: &str,
) -> Option<&'a Record> {
    let mut current = root;
    while let Some(id) = current {
        let node = arena.get(id);
        current = match compare_names(key, &node.record().last_name) {
            Ordering::Equal => return Some(node.record()),
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Where a key equal to its ancestor's may sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EqualKeys {
    /// Equal keys only ever appear in right subtrees (no rotations).
    RightOnly,
    /// Rotations may lift an equal key above its twin, so either side is allowed.
    EitherSide,
}

/// Checks the search-tree ordering: every key in a left subtree compares
/// less than its ancestor (or equal, under `EqualKeys::EitherSide`), every
/// key in a right subtree compares greater or equal. Returns the number of
/// reachable nodes.
pub(crate) fn check_order<N: BinaryNode>(
    arena: &NodeArena<N>,
    root: Option<NodeId>,
    equal_keys: EqualKeys,
) -> Result<usize> {
    // (node, lower bound, upper bound)
    let mut stack: Vec<(NodeId, Option<NodeId>, Option<NodeId>)> =
        root.map(|id| (id, None, None)).into_iter().collect();
    let mut visited = 0;

    while let Some((id, lower, upper)) = stack.pop() {
        visited += 1;
        if visited > arena.len() {
            return Err(SurdexError::InvariantViolation(
                "cycle detected: more reachable nodes than allocated".to_string(),
            ));
        }

        let node = arena.get(id);
        let key = &node.record().last_name;

        if let Some(lower) = lower {
            let bound = &arena.get(lower).record().last_name;
            if compare_names(key, bound) == Ordering::Less {
                return Err(SurdexError::InvariantViolation(format!(
                    "{} key {:?} is in the right subtree of {} key {:?}",
                    id, key, lower, bound
                )));
            }
        }
        if let Some(upper) = upper {
            let bound = &arena.get(upper).record().last_name;
            let misplaced = match compare_names(key, bound) {
                Ordering::Less => false,
                Ordering::Equal => equal_keys == EqualKeys::RightOnly,
                Ordering::Greater => true,
            };
            if misplaced {
                return Err(SurdexError::InvariantViolation(format!(
                    "{} key {:?} is in the left subtree of {} key {:?}",
                    id, key, upper, bound
                )));
            }
        }

        if let Some(left) = node.left() {
            stack.push((left, lower, Some(id)));
        }
        if let Some(right) = node.right() {
            stack.push((right, Some(id), upper));
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        record: Record,
        left: Option<NodeId>,
        right: Option<NodeId>,
    }

    impl BinaryNode for TestNode {
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

    /// Builds `top` with `child` attached on the given side.
    fn pair(top: &str, child: &str, child_left: bool) -> NodeArena<TestNode> {
        let mut arena = NodeArena::new();
        let root = arena.allocate(TestNode {
            record: Record::new("X", top, 1),
            left: None,
            right: None,
        });
        let leaf = arena.allocate(TestNode {
            record: Record::new("X", child, 2),
            left: None,
            right: None,
        });
        if child_left {
            arena.get_mut(root).left = Some(leaf);
        } else {
            arena.get_mut(root).right = Some(leaf);
        }
        arena
    }

    #[test]
    fn test_in_order_and_height() {
        let arena = pair("Lee", "Adams", true);
        let names: Vec<&str> = InOrder::new(&arena, Some(NodeId(0)))
            .map(|r| r.last_name.as_str())
            .collect();
        assert_eq!(names, vec!["Adams", "Lee"]);
        assert_eq!(height(&arena, Some(NodeId(0))), 2);
        assert_eq!(height(&arena, None), 0);
    }

    #[test]
    fn test_descend_first() {
        let arena = pair("Lee", "Park", false);
        let found = descend_first(&arena, Some(NodeId(0)), "PARK").unwrap();
        assert_eq!(found.customer_id.0, 2);
        assert!(descend_first(&arena, Some(NodeId(0)), "Kim").is_none());
    }

    #[test]
    fn test_check_order_equal_key_on_left() {
        let arena = pair("Lee", "lee", true);
        assert!(check_order(&arena, Some(NodeId(0)), EqualKeys::RightOnly).is_err());
        assert_eq!(
            check_order(&arena, Some(NodeId(0)), EqualKeys::EitherSide).unwrap(),
            2
        );
    }

    #[test]
    fn test_check_order_rejects_misplaced_keys() {
        let arena = pair("Lee", "Park", true);
        assert!(check_order(&arena, Some(NodeId(0)), EqualKeys::EitherSide).is_err());

        let arena = pair("Lee", "Adams", false);
        assert!(check_order(&arena, Some(NodeId(0)), EqualKeys::EitherSide).is_err());
    }

    #[test]
    fn test_check_order_detects_cycle() {
        let mut arena = pair("Lee", "Park", false);
        arena.get_mut(NodeId(1)).right = Some(NodeId(0));
        let err = check_order(&arena, Some(NodeId(0)), EqualKeys::RightOnly).unwrap_err();
        assert!(err.to_string().contains("cycle") || err.to_string().contains("subtree"));
    }
}
