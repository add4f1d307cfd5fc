//! Surname indices for Surdex.
//!
//! This crate provides:
//! - Case-insensitive surname comparison
//! - Record store holding the canonical records in insertion order
//! - Unordered index (linked list, most recent first)
//! - Ordered index (unbalanced binary search tree)
//! - Balanced index (red-black tree)
//! - Catalog tying the store and the three indices to one insertion stream

mod catalog;
mod index;
mod key;
mod store;
mod tree;
mod unordered;

pub use catalog::{Catalog, IndexMatches, SearchReport, SharedCatalog};
pub use index::{IndexKind, SurnameIndex};
pub use key::{compare_names, names_equal};
pub use store::RecordStore;
pub use tree::{BalancedIndex, Color, FixupStats, NodeId, OrderedIndex};
pub use unordered::UnorderedIndex;
