//! dictionary module
//!
//! Reads the word list that the trie is built from.

pub mod report;
pub mod word_list_loader;

/// Re-exports
pub use report::LoadReport;
pub use word_list_loader::WordListLoader;
