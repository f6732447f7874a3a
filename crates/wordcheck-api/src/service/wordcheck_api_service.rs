//! Word Validity Service

use wordcheck::{Trie, WordcheckService};

use crate::config::Config;
use crate::errors::Result;
use crate::models::{WordQuery, WordValidityResponse};

/// Common interface for the word validity service
///
/// This trait allows swapping production implementation (`WordcheckApiServiceFull`) with
/// test stubs/mocks.
pub trait WordcheckApiService: Send + Sync {
  /// Returns whether `word` is a known word. Never fails.
  fn is_valid_word(&self, word: &str) -> bool;

  /// Answers a validity request
  fn check(&self, request: &WordQuery) -> WordValidityResponse {
    WordValidityResponse {
      valid: self.is_valid_word(&request.word),
    }
  }
}

/// Word Validity Service
///
/// Holds the dictionary loaded at startup. Lookups run inline on the request
/// task: they are in-memory walks bounded by the word length.
#[derive(Debug, Clone)]
pub struct WordcheckApiServiceFull {
  /// wordcheck facade (internal implementation)
  inner: WordcheckService,
}

impl WordcheckApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including the word list path)
  ///
  /// # Errors
  /// Returns an error if the word list cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    let inner = WordcheckService::init(&config.wordcheck_config())?;
    Ok(Self { inner })
  }

  /// Wraps an already built trie
  #[must_use]
  pub fn from_trie(trie: Trie) -> Self {
    Self {
      inner: WordcheckService::from_trie(trie),
    }
  }

  /// Number of words in the dictionary
  #[must_use]
  pub fn word_count(&self) -> usize {
    self.inner.trie().len()
  }
}

/// Production implementation of trait `WordcheckApiService`
impl WordcheckApiService for WordcheckApiServiceFull {
  fn is_valid_word(&self, word: &str) -> bool {
    self.inner.is_valid_word(word)
  }
}
