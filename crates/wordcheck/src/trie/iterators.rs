//! Word enumeration

use std::iter::FusedIterator;

use super::prefix_trie::Trie;
use super::{NodeId, ROOT};

/// Iterator over the words of a [`Trie`], in lexicographic `char` order
///
/// Depth-first, pre-order: a word is yielded before any longer word that
/// extends it.
#[derive(Debug, Clone)]
pub struct Words<'a> {
  trie: &'a Trie,
  /// Pending nodes with the word spelled so far
  stack: Vec<(NodeId, String)>,
  remaining: usize,
}

impl<'a> Words<'a> {
  pub(crate) fn new(trie: &'a Trie) -> Self {
    Self {
      trie,
      stack: vec![(ROOT, String::new())],
      remaining: trie.len(),
    }
  }
}

impl Iterator for Words<'_> {
  type Item = String;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some((id, word)) = self.stack.pop() {
      // reversed so the smallest char is popped first
      for &(c, child) in self.trie.children(id).iter().rev() {
        let mut next = String::with_capacity(word.len() + c.len_utf8());
        next.push_str(&word);
        next.push(c);
        self.stack.push((child, next));
      }

      if self.trie.is_end(id) {
        self.remaining -= 1;
        return Some(word);
      }
    }
    None
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Words<'_> {}

impl FusedIterator for Words<'_> {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn yields_words_in_order() {
    let trie: Trie = ["dog", "cart", "car", "cat", "do"].into_iter().collect();
    assert_eq!(trie.words(), vec!["car", "cart", "cat", "do", "dog"]);
  }

  #[test]
  fn yields_empty_string_first() {
    let trie: Trie = ["b", "", "a"].into_iter().collect();
    assert_eq!(trie.words(), vec!["", "a", "b"]);
  }

  #[test]
  fn exact_size() {
    let trie: Trie = ["x", "xy", "xyz"].into_iter().collect();
    let mut iter = trie.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
  }

  #[test]
  fn empty_trie_yields_nothing() {
    let trie = Trie::default();
    assert_eq!(trie.iter().next(), None);
  }

  #[test]
  fn every_word_round_trips() {
    let input = ["naïve", "日本", "日本語", "zebra", "a"];
    let trie: Trie = input.into_iter().collect();

    for word in &trie {
      assert!(trie.contains(&word));
    }
    assert_eq!(trie.iter().count(), input.len());
  }
}
