//! Error definitions
//!
//! The trie itself never fails: an unknown word is a plain `false`.
//! Everything here belongs to the collaborators around it (configuration and
//! word-list loading), which must fail fast before a trie is ever served.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Configuration (`WordcheckConfig`) errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// words.path is empty
  #[error("words.path must not be empty")]
  EmptyWordListPath,

  /// words.path points at a directory
  #[error("words.path is a directory, expected a file: path={path:?}")]
  WordListPathIsDirectory {
    /// Offending path
    path: PathBuf,
  },
}

/// Word list loading errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LoadError {
  /// The word list could not be opened
  #[error("could not open word list: path={path:?}, error={source}")]
  Open {
    /// Path that was opened
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Reading failed part way through the source
  #[error("could not read word list at line {line}: {source}")]
  Read {
    /// 1-based line number being read
    line: usize,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// A line is not valid UTF-8
  #[error("word list line {line} is not valid UTF-8")]
  InvalidUtf8 {
    /// 1-based line number
    line: usize,
  },
}

/// Unified error
///
/// Public APIs of this crate return this error through `WordcheckResult<T>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WordcheckError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Word list loading error
  #[error(transparent)]
  Load(#[from] LoadError),
}

/// Standard Result alias of the wordcheck crate
pub type WordcheckResult<T> = Result<T, WordcheckError>;
