//! wordcheck dictionary library
//!
//! Answers whether a string is a known word, using a prefix tree built once
//! from a newline-delimited word list.

/// Config module - WordcheckConfig, LineEnding and other settings
pub mod config;

/// Dictionary module - reads the word list into a trie builder
pub mod dictionary;

/// Error module - WordcheckError, WordcheckResult and friends
pub mod errors;

/// Service module - WordcheckService facade
pub mod service;

/// Trie module - TrieBuilder (build phase) and Trie (serve phase)
pub mod trie;

/// Re-exports
pub use config::{LineEnding, WordcheckConfig};
pub use errors::{WordcheckError, WordcheckResult};
pub use service::WordcheckService;
pub use trie::{Trie, TrieBuilder};
