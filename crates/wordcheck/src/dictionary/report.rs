//! Load report
//!
//! Counts what happened to each line of the word list while it was consumed.

use serde::Serialize;

/// Result summary of loading a word list into a trie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
  /// Lines read from the source
  pub lines_read: usize,
  /// Lines that added a new word
  pub inserted: usize,
  /// Lines whose word was already present
  pub duplicates: usize,
  /// Blank lines dropped by the loader
  pub skipped_blank: usize,
  /// Lines whose invalid UTF-8 bytes were replaced with U+FFFD
  pub lossy_lines: usize,
}

impl LoadReport {
  /// Every line added a new word (no duplicates, nothing skipped)
  pub fn is_all_inserted(&self) -> bool {
    self.duplicates == 0 && self.skipped_blank == 0
  }

  /// Record one line read
  pub fn record_line(&mut self) {
    self.lines_read += 1;
  }

  /// Record a new word
  pub fn record_inserted(&mut self) {
    self.inserted += 1;
  }

  /// Record a duplicate word
  pub fn record_duplicate(&mut self) {
    self.duplicates += 1;
  }

  /// Record a skipped blank line
  pub fn record_skipped_blank(&mut self) {
    self.skipped_blank += 1;
  }

  /// Record a line decoded with replacement characters
  pub fn record_lossy_line(&mut self) {
    self.lossy_lines += 1;
  }
}
