//! Build phase of the trie

use std::collections::HashMap;

use super::prefix_trie::Trie;
use super::{NodeId, ROOT};

/// Mutable node used while words are still being inserted
#[derive(Debug, Clone, Default)]
pub(crate) struct BuilderNode {
  /// Child handle per character
  pub(crate) children: HashMap<char, NodeId>,
  /// True when the path from the root to this node spells a word
  pub(crate) is_end: bool,
}

/// Insert-only trie builder
///
/// Holds the whole tree in an arena; nodes are created lazily the first time a
/// traversal needs a missing child and are never removed.
/// Call [`finish`](Self::finish) to obtain the read-only [`Trie`].
///
/// # Examples
/// ```
/// use wordcheck::trie::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.insert("cat");
/// builder.insert("car");
/// let trie = builder.finish();
///
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("ca"));
/// ```
#[derive(Debug, Clone)]
pub struct TrieBuilder {
  /// Node arena, `nodes[ROOT]` is the root
  nodes: Vec<BuilderNode>,
  /// Number of distinct words
  len: usize,
}

impl TrieBuilder {
  /// Creates a builder holding only the root
  pub fn new() -> Self {
    Self {
      nodes: vec![BuilderNode::default()],
      len: 0,
    }
  }

  /// Inserts a word, walking it character by character (code points, not bytes).
  ///
  /// Inserting the same word again allocates nothing and leaves membership
  /// unchanged. The empty string marks the root itself.
  ///
  /// Returns `true` if the word was not already present.
  pub fn insert(&mut self, word: &str) -> bool {
    let mut current = ROOT;

    for c in word.chars() {
      let existing = self.nodes[current].children.get(&c).copied();
      current = match existing {
        Some(child) => child,
        None => {
          let child = self.nodes.len();
          self.nodes.push(BuilderNode::default());
          self.nodes[current].children.insert(c, child);
          child
        }
      };
    }

    let node = &mut self.nodes[current];
    let added = !node.is_end;
    node.is_end = true;
    if added {
      self.len += 1;
    }
    added
  }

  /// Number of distinct words inserted so far
  pub fn len(&self) -> usize {
    self.len
  }

  /// True if no word has been inserted
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Number of nodes in the arena, root included
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Ends the build phase and freezes the tree into a [`Trie`].
  #[must_use]
  pub fn finish(self) -> Trie {
    Trie::from_builder_nodes(self.nodes, self.len)
  }
}

impl Default for TrieBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: AsRef<str>> Extend<S> for TrieBuilder {
  fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
    for word in iter {
      self.insert(word.as_ref());
    }
  }
}

impl<S: AsRef<str>> FromIterator<S> for TrieBuilder {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    let mut builder = Self::new();
    builder.extend(iter);
    builder
  }
}
