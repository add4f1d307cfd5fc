//! Balanced index: a red-black tree keyed by surname.
//!
//! Nodes live in a `NodeArena` with parent back-references stored as ids.
//! Insertion attaches a red leaf at the BST position (equal keys go right)
//! and then runs the classic bottom-up fixup:
//!
//! ```text
//! descend → attach red leaf → fixup loop (recolor / rotate) → root := black
//! ```
//!
//! Invariants after every insert:
//! 1. The root is black.
//! 2. No red node has a red child.
//! 3. Every root-to-null path crosses the same number of black nodes.
//! 4. Left subtrees hold keys less than or equal to the node, right subtrees
//!    keys greater than or equal. Rotations can move an equal key to the left.

use super::arena::{BinaryNode, NodeArena, NodeId};
use super::traverse::{self, EqualKeys, InOrder};
use crate::index::{IndexKind, SurnameIndex};
use crate::key::{compare_names, names_equal};
use std::cmp::Ordering;
use surdex_common::{Record, Result, SurdexError};

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
struct RbNode {
    record: Record,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
    color: Color,
}

impl BinaryNode for RbNode {
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

/// Fixup counters, useful when comparing insertion cost across datasets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixupStats {
    /// Case A applications (parent and uncle red).
    pub recolorings: u64,
    /// Single rotations performed (case B and case C).
    pub rotations: u64,
}

/// Red-black tree index.
#[derive(Debug, Clone, Default)]
pub struct BalancedIndex {
    arena: NodeArena<RbNode>,
    root: Option<NodeId>,
    stats: FixupStats,
}

impl BalancedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        traverse::height(&self.arena, self.root)
    }

    /// Color of the root, None when empty.
    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|id| self.node(id).color)
    }

    /// Fixup counters accumulated since creation or the last `clear`.
    pub fn stats(&self) -> FixupStats {
        self.stats
    }

    /// Ascending traversal.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        InOrder::new(&self.arena, self.root)
    }

    // =========================================================================
    // Node Accessors
    // =========================================================================

    #[inline(always)]
    fn node(&self, id: NodeId) -> &RbNode {
        self.arena.get(id)
    }

    #[inline(always)]
    fn node_mut(&mut self, id: NodeId) -> &mut RbNode {
        self.arena.get_mut(id)
    }

    #[inline(always)]
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline(always)]
    fn left(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).left
    }

    #[inline(always)]
    fn right(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).right
    }

    /// Null leaves are black.
    #[inline(always)]
    fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color)
    }

    #[inline(always)]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    // =========================================================================
    // Rotations
    // =========================================================================

    /// Left rotation around `node`: its right child takes its place and
    /// `node` becomes that child's left child.
    fn rotate_left(&mut self, node: NodeId) {
        let Some(pivot) = self.right(node) else {
            debug_assert!(false, "rotate_left on {} without right child", node);
            return;
        };

        // pivot's left subtree moves across to node's right
        let moved = self.left(pivot);
        self.node_mut(node).right = moved;
        if let Some(moved) = moved {
            self.node_mut(moved).parent = Some(node);
        }

        let parent = self.parent(node);
        self.node_mut(pivot).parent = parent;
        match parent {
            None => self.root = Some(pivot),
            Some(p) if self.left(p) == Some(node) => self.node_mut(p).left = Some(pivot),
            Some(p) => self.node_mut(p).right = Some(pivot),
        }

        self.node_mut(pivot).left = Some(node);
        self.node_mut(node).parent = Some(pivot);
        self.stats.rotations += 1;
    }

    /// Right rotation around `node`: mirror image of `rotate_left`.
    fn rotate_right(&mut self, node: NodeId) {
        let Some(pivot) = self.left(node) else {
            debug_assert!(false, "rotate_right on {} without left child", node);
            return;
        };

        let moved = self.right(pivot);
        self.node_mut(node).left = moved;
        if let Some(moved) = moved {
            self.node_mut(moved).parent = Some(node);
        }

        let parent = self.parent(node);
        self.node_mut(pivot).parent = parent;
        match parent {
            None => self.root = Some(pivot),
            Some(p) if self.right(p) == Some(node) => self.node_mut(p).right = Some(pivot),
            Some(p) => self.node_mut(p).left = Some(pivot),
        }

        self.node_mut(pivot).right = Some(node);
        self.node_mut(node).parent = Some(pivot);
        self.stats.rotations += 1;
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Restores invariants 1-3 after `node` was attached as a red leaf.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(parent) = self.parent(node) {
            if self.node(parent).color == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.parent(parent) else {
                break;
            };

            let parent_is_left = self.left(grandparent) == Some(parent);
            let uncle = if parent_is_left {
                self.right(grandparent)
            } else {
                self.left(grandparent)
            };

            // Case A: red uncle, push the violation two levels up
            if self.color_of(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                self.stats.recolorings += 1;
                node = grandparent;
                continue;
            }

            // Case B: inner child, rotate it to the outside
            let node_is_left = self.left(parent) == Some(node);
            if node_is_left != parent_is_left {
                node = parent;
                if parent_is_left {
                    self.rotate_left(node);
                } else {
                    self.rotate_right(node);
                }
            }

            // Case C: outer child
            let Some(parent) = self.parent(node) else {
                break;
            };
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Verifies invariants 1-4 and every parent back-reference.
    ///
    /// Returns the number of black nodes on each root-to-leaf path.
    pub fn check_invariants(&self) -> Result<usize> {
        let Some(root) = self.root else {
            return Ok(0);
        };

        if self.node(root).color != Color::Black {
            return Err(SurdexError::InvariantViolation(format!(
                "root {} is red",
                root
            )));
        }
        if let Some(parent) = self.parent(root) {
            return Err(SurdexError::InvariantViolation(format!(
                "root {} has parent {}",
                root, parent
            )));
        }

        let reachable = traverse::check_order(&self.arena, self.root, EqualKeys::EitherSide)?;
        if reachable != self.arena.len() {
            return Err(SurdexError::InvariantViolation(format!(
                "{} nodes allocated but {} reachable from the root",
                self.arena.len(),
                reachable
            )));
        }

        self.black_height(root)
    }

    /// Black nodes on every path from `id` down to a null leaf, `id` included.
    fn black_height(&self, id: NodeId) -> Result<usize> {
        let node = self.node(id);
        let mut heights = [0usize; 2];

        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            let child_node = self.node(child);
            if child_node.parent != Some(id) {
                return Err(SurdexError::InvariantViolation(format!(
                    "{} is a child of {} but points to parent {:?}",
                    child, id, child_node.parent
                )));
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(SurdexError::InvariantViolation(format!(
                    "red node {} has red child {}",
                    id, child
                )));
            }
            heights[slot] = self.black_height(child)?;
        }

        if heights[0] != heights[1] {
            return Err(SurdexError::InvariantViolation(format!(
                "black height differs below {}: left {} right {}",
                id, heights[0], heights[1]
            )));
        }

        let own = usize::from(node.color == Color::Black);
        Ok(heights[0] + own)
    }
}

impl SurnameIndex for BalancedIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Balanced
    }

    fn insert(&mut self, record: Record) {
        let mut parent = None;
        let mut goes_left = false;
        let mut current = self.root;

        while let Some(id) = current {
            parent = Some(id);
            goes_left =
                compare_names(&record.last_name, &self.node(id).record.last_name) == Ordering::Less;
            current = if goes_left {
                self.left(id)
            } else {
                self.right(id)
            };
        }

        let node = self.arena.allocate(RbNode {
            record,
            left: None,
            right: None,
            parent,
            color: Color::Red,
        });

        match parent {
            None => self.root = Some(node),
            Some(p) if goes_left => self.node_mut(p).left = Some(node),
            Some(p) => self.node_mut(p).right = Some(node),
        }

        self.insert_fixup(node);
    }

    /// Full traversal with filter, same policy as the ordered index.
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
        self.stats = FixupStats::default();
    }
}
