//! Serve phase of the trie

use serde::Serialize;

use super::iterators::Words;
use super::trie_builder::{BuilderNode, TrieBuilder};
use super::{NodeId, ROOT};

/// Frozen node: a slice `edges[start..end]` of the shared edge table
#[derive(Debug, Clone, Copy)]
struct Node {
  start: usize,
  end: usize,
  is_end: bool,
}

/// Size summary of a trie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
  /// Number of distinct words
  pub words: usize,
  /// Number of nodes, root included
  pub nodes: usize,
}

/// Read-only prefix tree
///
/// Only obtainable from [`TrieBuilder::finish`] (or `collect`), so every
/// insert has happened before the first lookup. Holds no interior
/// mutability: share it as `Arc<Trie>` and query it from any thread.
///
/// Children of a node are stored as a sorted slice of `(char, NodeId)` in one
/// contiguous edge table and looked up by binary search.
#[derive(Debug, Clone)]
pub struct Trie {
  nodes: Box<[Node]>,
  edges: Box<[(char, NodeId)]>,
  len: usize,
}

impl Trie {
  /// Flattens the builder arena. Node handles are kept as-is.
  pub(crate) fn from_builder_nodes(nodes: Vec<BuilderNode>, len: usize) -> Self {
    let edge_count = nodes.iter().map(|node| node.children.len()).sum();
    let mut edges: Vec<(char, NodeId)> = Vec::with_capacity(edge_count);
    let mut frozen = Vec::with_capacity(nodes.len());

    for node in nodes {
      let start = edges.len();
      edges.extend(node.children);
      edges[start..].sort_unstable_by_key(|&(c, _)| c);
      frozen.push(Node {
        start,
        end: edges.len(),
        is_end: node.is_end,
      });
    }

    Self {
      nodes: frozen.into_boxed_slice(),
      edges: edges.into_boxed_slice(),
      len,
    }
  }

  /// Exact-match lookup.
  ///
  /// Walks `word` one code point at a time and never allocates. Returns
  /// `false` as soon as a character has no child; otherwise returns whether
  /// the last node reached ends a word. Total over all inputs: `""` answers
  /// whether the empty string was inserted.
  pub fn contains(&self, word: &str) -> bool {
    self.walk(word).is_some_and(|id| self.nodes[id].is_end)
  }

  /// Word validity check handed to the serving layer. Same as [`contains`](Self::contains).
  pub fn is_valid_word(&self, word: &str) -> bool {
    self.contains(word)
  }

  /// True if at least one word starts with `prefix`.
  pub fn has_prefix(&self, prefix: &str) -> bool {
    self
      .walk(prefix)
      .is_some_and(|id| self.nodes[id].is_end || !self.children(id).is_empty())
  }

  /// Iterates every word in lexicographic `char` order.
  pub fn iter(&self) -> Words<'_> {
    Words::new(self)
  }

  /// Collects every word in lexicographic `char` order.
  pub fn words(&self) -> Vec<String> {
    self.iter().collect()
  }

  /// Number of distinct words
  pub fn len(&self) -> usize {
    self.len
  }

  /// True if the trie holds no word (not even the empty string)
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Number of nodes, root included
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Size summary
  pub fn stats(&self) -> TrieStats {
    TrieStats {
      words: self.len,
      nodes: self.nodes.len(),
    }
  }

  /// Follows `s` from the root, `None` on the first missing child
  fn walk(&self, s: &str) -> Option<NodeId> {
    s.chars().try_fold(ROOT, |id, c| self.child(id, c))
  }

  fn child(&self, id: NodeId, c: char) -> Option<NodeId> {
    let edges = self.children(id);
    edges.binary_search_by_key(&c, |&(key, _)| key).ok().map(|i| edges[i].1)
  }

  /// Sorted outgoing edges of a node
  pub(crate) fn children(&self, id: NodeId) -> &[(char, NodeId)] {
    let node = &self.nodes[id];
    &self.edges[node.start..node.end]
  }

  pub(crate) fn is_end(&self, id: NodeId) -> bool {
    self.nodes[id].is_end
  }
}

impl Default for Trie {
  fn default() -> Self {
    TrieBuilder::new().finish()
  }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    iter.into_iter().collect::<TrieBuilder>().finish()
  }
}

impl<'a> IntoIterator for &'a Trie {
  type Item = String;
  type IntoIter = Words<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cat_car_dog() -> Trie {
    ["cat", "car", "dog"].into_iter().collect()
  }

  #[test]
  fn finds_inserted_words_only() {
    let trie = cat_car_dog();

    assert!(trie.contains("cat"));
    assert!(trie.contains("car"));
    assert!(trie.contains("dog"));
    assert!(!trie.contains("ca"));
    assert!(!trie.contains("do"));
    assert!(!trie.contains("catdog"));
    assert!(!trie.contains("cats"));
    assert!(!trie.contains("bird"));
  }

  #[test]
  fn empty_string_is_not_a_member_by_default() {
    assert!(!cat_car_dog().contains(""));
  }

  #[test]
  fn empty_string_when_inserted() {
    let trie: Trie = ["", "a"].into_iter().collect();
    assert!(trie.contains(""));
    assert!(trie.contains("a"));
    assert_eq!(trie.len(), 2);
  }

  #[test]
  fn empty_trie_rejects_everything() {
    let trie = Trie::default();

    assert!(trie.is_empty());
    assert!(!trie.contains(""));
    assert!(!trie.contains("anything"));
    assert!(!trie.has_prefix(""));
    assert_eq!(trie.node_count(), 1);
  }

  #[test]
  fn prefix_insert_order_does_not_matter() {
    let forward: Trie = ["car", "cart"].into_iter().collect();
    let backward: Trie = ["cart", "car"].into_iter().collect();
    let only_cart: Trie = ["cart"].into_iter().collect();

    for trie in [&forward, &backward] {
      assert!(trie.contains("car"));
      assert!(trie.contains("cart"));
      assert!(!trie.contains("ca"));
    }
    assert!(!only_cart.contains("car"));
    assert_eq!(forward.node_count(), backward.node_count());
  }

  #[test]
  fn repeated_insert_is_idempotent() {
    let once: Trie = ["apple"].into_iter().collect();
    let many: Trie = std::iter::repeat_n("apple", 10).collect();

    assert_eq!(once.stats(), many.stats());
    assert_eq!(once.words(), many.words());
  }

  #[test]
  fn walks_code_points_not_bytes() {
    let trie: Trie = ["café"].into_iter().collect();

    assert!(trie.contains("café"));
    // same letters, decomposed accent: different code points
    assert!(!trie.contains("cafe\u{301}"));
    assert!(!trie.contains("cafe"));
    assert!(!trie.contains("caf"));
    assert_eq!(trie.node_count(), 5);
  }

  #[test]
  fn has_prefix_follows_paths() {
    let trie = cat_car_dog();

    assert!(trie.has_prefix(""));
    assert!(trie.has_prefix("c"));
    assert!(trie.has_prefix("ca"));
    assert!(trie.has_prefix("cat"));
    assert!(!trie.has_prefix("cats"));
    assert!(!trie.has_prefix("x"));
  }

  #[test]
  fn is_valid_word_matches_contains() {
    let trie = cat_car_dog();
    for word in ["cat", "ca", "", "dog", "dogs"] {
      assert_eq!(trie.is_valid_word(word), trie.contains(word));
    }
  }

  #[test]
  fn stats_serialize() {
    let json = serde_json::to_string(&cat_car_dog().stats()).unwrap();
    // root, c, a, t, r, d, o, g
    assert_eq!(json, r#"{"words":3,"nodes":8}"#);
  }

  #[test]
  fn trie_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Trie>();
  }
}
