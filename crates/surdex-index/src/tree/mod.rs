//! Binary search tree indices.
//!
//! This module provides two trees over the same node arena design:
//!
//! ## OrderedIndex (Unbalanced BST)
//!
//! - Strictly-less keys go left, equal or greater go right
//! - No rebalancing: height equals the record count for sorted input
//! - Kept as the unbalanced baseline for comparison
//!
//! ## BalancedIndex (Red-Black Tree)
//!
//! - Same descent rule, followed by recolor/rotate fixup
//! - Height stays within `2 * log2(n + 1)`
//!
//! ## Memory Layout
//!
//! ```text
//! NodeArena<N>: [ n0 | n1 | n2 | ... ]   (Vec, grows on insert)
//!                  ^
//!   root: Option<NodeId> ──┘   left/right/parent are NodeId(u32)
//! ```
//!
//! Search for all records with a surname walks the whole tree and filters,
//! because equal keys are routed right and may end up below unrelated
//! nodes after later inserts (and after rotations in the balanced tree).
//! `find_first` is the O(height) descent that stops at the first match.

pub mod arena;
pub mod bst;
pub mod rbtree;
pub mod traverse;

pub use arena::NodeId;
pub use bst::OrderedIndex;
pub use rbtree::{BalancedIndex, Color, FixupStats};
