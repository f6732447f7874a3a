//! Word List Loading Module
//!
//! Reads a newline-delimited word list (one word per line) and feeds it into a
//! [`TrieBuilder`]. Lines are split on `\n` only; what happens to a trailing
//! `\r` or to surrounding whitespace is decided by [`LineEnding`].
//! A final line without a terminating `\n` is still a word, but nothing after
//! the last `\n` counts as an extra empty line.
//! Bytes that are not valid UTF-8 become U+FFFD unless strict decoding is on.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::report::LoadReport;
use crate::config::{LineEnding, WordListConfig};
use crate::errors::LoadError;
use crate::trie::TrieBuilder;

/// Word list loader
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListLoader {
  /// Policy applied to each line
  line_ending: LineEnding,
  /// Drop lines that are empty after `line_ending`
  skip_blank_lines: bool,
  /// Fail on a line that is not valid UTF-8 instead of replacing bytes
  strict_utf8: bool,
}

impl WordListLoader {
  /// Creates a loader with explicit policies
  pub fn new(line_ending: LineEnding, skip_blank_lines: bool) -> Self {
    Self {
      line_ending,
      skip_blank_lines,
      strict_utf8: false,
    }
  }

  /// Sets whether an invalid UTF-8 line aborts the load
  #[must_use]
  pub fn with_strict_utf8(mut self, strict_utf8: bool) -> Self {
    self.strict_utf8 = strict_utf8;
    self
  }

  /// Creates a loader from the [words] configuration section
  pub fn from_config(config: &WordListConfig) -> Self {
    Self::new(config.line_ending, config.skip_blank_lines).with_strict_utf8(config.strict_utf8)
  }

  /// Loads the word list at `path` into `builder`.
  ///
  /// # Errors
  /// - `LoadError::Open` if the file cannot be opened
  /// - `LoadError::Read` if reading a line fails
  /// - `LoadError::InvalidUtf8` for a bad line, only with strict decoding
  pub fn load_path<P: AsRef<Path>>(
    &self,
    path: P,
    builder: &mut TrieBuilder,
  ) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let reader = open(path)?;
    let report = self.load_reader(reader, builder)?;

    info!(
      path = %path.display(),
      lines = report.lines_read,
      inserted = report.inserted,
      duplicates = report.duplicates,
      skipped_blank = report.skipped_blank,
      lossy_lines = report.lossy_lines,
      "Loaded word list"
    );

    Ok(report)
  }

  /// Loads words from any buffered reader into `builder`.
  pub fn load_reader<R: BufRead>(
    &self,
    reader: R,
    builder: &mut TrieBuilder,
  ) -> Result<LoadReport, LoadError> {
    self.scan(reader, |word| builder.insert(word))
  }

  /// Reads the word list at `path` as an ordered sequence of words.
  pub fn read_words_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, LoadError> {
    self.read_words(open(path.as_ref())?)
  }

  /// Reads all words from a buffered reader, in source order, duplicates included.
  pub fn read_words<R: BufRead>(&self, reader: R) -> Result<Vec<String>, LoadError> {
    let mut words = Vec::new();
    self.scan(reader, |word| {
      words.push(word.to_string());
      true
    })?;
    Ok(words)
  }

  /// Splits the source into lines and hands each kept word to `on_word`,
  /// which answers whether the word was new.
  fn scan<R: BufRead>(
    &self,
    mut reader: R,
    mut on_word: impl FnMut(&str) -> bool,
  ) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();

    loop {
      buf.clear();
      let line_no = report.lines_read + 1;

      let read = reader.read_until(b'\n', &mut buf).map_err(|e| LoadError::Read {
        line: line_no,
        source: Arc::new(e),
      })?;
      if read == 0 {
        break;
      }
      report.record_line();

      if buf.last() == Some(&b'\n') {
        buf.pop();
      }
      let line = String::from_utf8_lossy(&buf);
      if let Cow::Owned(_) = line {
        if self.strict_utf8 {
          return Err(LoadError::InvalidUtf8 { line: line_no });
        }
        warn!(line = line_no, "Replaced invalid UTF-8 in word list line");
        report.record_lossy_line();
      }
      let word = self.line_ending.apply(&line);

      if self.skip_blank_lines && word.is_empty() {
        debug!(line = line_no, "Skipping blank line");
        report.record_skipped_blank();
        continue;
      }

      if on_word(word) {
        report.record_inserted();
      } else {
        report.record_duplicate();
      }
    }

    Ok(report)
  }
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
  let file = File::open(path).map_err(|e| LoadError::Open {
    path: path.to_path_buf(),
    source: Arc::new(e),
  })?;
  Ok(BufReader::new(file))
}
