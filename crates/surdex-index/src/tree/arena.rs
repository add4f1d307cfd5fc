//! Arena storage for index nodes.
//!
//! Nodes are allocated sequentially into a `Vec` and addressed by `NodeId`.
//! Links between nodes (children, parents, list successors) are ids, never
//! references, so rotations only rewrite small integers.

use surdex_common::Record;

/// Index of a node inside a `NodeArena`. `u32` supports ~4 billion nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the arena slot of this id.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Contiguous node storage. Nodes are never freed individually; the whole
/// arena is dropped or cleared at teardown.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<N> {
    nodes: Vec<N>,
}

impl<N> NodeArena<N> {
    /// Creates an empty arena.
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocates a node and returns its id.
    #[inline]
    pub(crate) fn allocate(&mut self, node: N) -> NodeId {
        let index = self.nodes.len();
        if index > u32::MAX as usize {
            panic!("NodeArena out of ids");
        }
        self.nodes.push(node);
        NodeId(index as u32)
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> &N {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut N {
        &mut self.nodes[id.index()]
    }

    /// Number of allocated nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.shrink_to_fit();
    }
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to a binary tree node, shared by the ordered and balanced indices.
pub(crate) trait BinaryNode {
    fn record(&self) -> &Record;
    fn left(&self) -> Option<NodeId>;
    fn right(&self) -> Option<NodeId>;
}
