// crates/wordcheck/src/service.rs

//! WordcheckService: facade of the wordcheck crate.
//!
//! - word list loading (WordListLoader)
//! - trie construction (TrieBuilder -> Trie)
//!
//! Serving layers only need this struct. It is built once, before any query,
//! and afterwards only hands out shared read access to the trie.

use std::sync::Arc;

use tracing::info;

use crate::config::WordcheckConfig;
use crate::dictionary::{LoadReport, WordListLoader};
use crate::errors::error_definition::WordcheckResult;
use crate::trie::{Trie, TrieBuilder};

/// Facade of the wordcheck crate.
#[derive(Debug, Clone)]
pub struct WordcheckService {
  /// Frozen dictionary
  trie: Arc<Trie>,

  /// What happened while loading the word list
  report: LoadReport,
}

impl WordcheckService {
  /// Initializes the service (config validation + word list load + trie build)
  ///
  /// # Errors
  /// - invalid configuration
  /// - the word list cannot be opened or read
  ///
  /// No partially loaded dictionary is ever returned.
  pub fn init(config: &WordcheckConfig) -> WordcheckResult<Self> {
    config.validate()?;

    let loader = WordListLoader::from_config(&config.words);
    let mut builder = TrieBuilder::new();
    let report = loader.load_path(config.words_path(), &mut builder)?;

    let trie = builder.finish();
    let stats = trie.stats();
    info!(
      words = stats.words,
      nodes = stats.nodes,
      line_ending = %config.line_ending(),
      "Dictionary ready"
    );

    Ok(Self {
      trie: Arc::new(trie),
      report,
    })
  }

  /// Wraps an already built trie (no word list involved).
  pub fn from_trie(trie: Trie) -> Self {
    Self {
      trie: Arc::new(trie),
      report: LoadReport::default(),
    }
  }

  /// Returns whether `word` is in the dictionary.
  pub fn is_valid_word(&self, word: &str) -> bool {
    self.trie.contains(word)
  }

  /// Shared handle to the trie
  pub fn trie(&self) -> &Arc<Trie> {
    &self.trie
  }

  /// Load summary (all zero when built with [`from_trie`](Self::from_trie))
  pub fn report(&self) -> &LoadReport {
    &self.report
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;
  use crate::errors::{ConfigError, LoadError, WordcheckError};

  #[test]
  fn init_loads_word_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    fs::write(&path, "cat\ncar\ndog\ncat\n").unwrap();

    let service = WordcheckService::init(&WordcheckConfig::with_words_path(&path)).unwrap();

    assert!(service.is_valid_word("cat"));
    assert!(!service.is_valid_word("ca"));
    assert_eq!(service.report().inserted, 3);
    assert_eq!(service.report().duplicates, 1);
    assert_eq!(service.trie().len(), 3);
  }

  #[test]
  fn init_fails_without_word_list() {
    let temp_dir = TempDir::new().unwrap();
    let config = WordcheckConfig::with_words_path(temp_dir.path().join("missing.txt"));

    let err = WordcheckService::init(&config).unwrap_err();
    assert!(matches!(err, WordcheckError::Load(LoadError::Open { .. })));
  }

  #[test]
  fn init_rejects_invalid_config() {
    let err = WordcheckService::init(&WordcheckConfig::with_words_path("")).unwrap_err();
    assert!(matches!(
      err,
      WordcheckError::Config(ConfigError::EmptyWordListPath)
    ));
  }

  #[test]
  fn from_trie_has_empty_report() {
    let service = WordcheckService::from_trie(["x"].into_iter().collect());
    assert!(service.is_valid_word("x"));
    assert_eq!(*service.report(), LoadReport::default());
  }
}
