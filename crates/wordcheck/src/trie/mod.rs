//! trie module
//!
//! Prefix tree over Unicode scalar values, split into two phases:
//!
//! - [`TrieBuilder`]: build phase. Only `insert` (needs `&mut self`).
//! - [`Trie`]: serve phase. Produced by [`TrieBuilder::finish`], read-only,
//!   `Send + Sync`, shared across request handlers through `Arc`.
//!
//! Nodes of both phases live in an arena and refer to each other by index.

pub mod iterators;
pub mod prefix_trie;
pub mod trie_builder;

/// Handle of a node inside the arena
pub(crate) type NodeId = usize;

/// The root is always the first node of the arena
pub(crate) const ROOT: NodeId = 0;

/// Re-exports
pub use iterators::Words;
pub use prefix_trie::{Trie, TrieStats};
pub use trie_builder::TrieBuilder;
