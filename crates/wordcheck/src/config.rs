// crates/wordcheck/src/config.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default location of the word list, relative to the working directory.
pub const DEFAULT_WORDS_PATH: &str = "./words.txt";

/// Top-level configuration for wordcheck.
#[derive(Debug, Clone, Deserialize)]
pub struct WordcheckConfig {
  /// [words] section
  pub words: WordListConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [words] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WordListConfig {
  /// Newline-delimited word list (one word per line)
  pub path: PathBuf,
  /// What to do with the end of each line
  #[serde(default)]
  pub line_ending: LineEnding,
  /// Drop lines that are empty once `line_ending` has been applied.
  ///
  /// When `false`, a blank line inserts the empty string into the dictionary.
  #[serde(default)]
  pub skip_blank_lines: bool,
  /// Refuse a word list with a line that is not valid UTF-8.
  ///
  /// When `false`, invalid bytes are replaced with U+FFFD and loading goes on.
  #[serde(default)]
  pub strict_utf8: bool,
}

/// Line policy applied to every line of the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
  /// Remove one trailing `\r` (CRLF files read the same as LF files)
  #[default]
  StripCr,
  /// Keep the line exactly as stored
  Verbatim,
  /// Remove leading and trailing whitespace
  Trim,
}

impl LineEnding {
  /// Returns the configuration name of the policy.
  pub fn name(&self) -> &'static str {
    match self {
      LineEnding::StripCr => "strip-cr",
      LineEnding::Verbatim => "verbatim",
      LineEnding::Trim => "trim",
    }
  }

  /// Applies the policy to one line (already stripped of its `\n`).
  pub fn apply<'a>(&self, line: &'a str) -> &'a str {
    match self {
      LineEnding::StripCr => line.strip_suffix('\r').unwrap_or(line),
      LineEnding::Verbatim => line,
      LineEnding::Trim => line.trim(),
    }
  }
}

impl fmt::Display for LineEnding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for LineEnding {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "strip-cr" => Ok(Self::StripCr),
      "verbatim" => Ok(Self::Verbatim),
      "trim" => Ok(Self::Trim),
      _ => Err(format!(
        "Unknown line ending policy: {}. Valid values: strip-cr, verbatim, trim",
        s
      )),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Returns the directive understood by `tracing_subscriber::EnvFilter`.
  pub fn as_filter(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Accessor Methods =====

impl WordcheckConfig {
  /// Creates a configuration for `path` with default policies.
  pub fn with_words_path(path: impl Into<PathBuf>) -> Self {
    Self {
      words: WordListConfig {
        path: path.into(),
        line_ending: LineEnding::default(),
        skip_blank_lines: false,
        strict_utf8: false,
      },
      logging: LoggingConfig::default(),
    }
  }

  /// Returns the word list path.
  pub fn words_path(&self) -> &Path {
    &self.words.path
  }

  /// Returns the line policy.
  pub fn line_ending(&self) -> LineEnding {
    self.words.line_ending
  }

  /// Returns whether blank lines are dropped.
  pub fn skip_blank_lines(&self) -> bool {
    self.words.skip_blank_lines
  }

  /// Returns whether invalid UTF-8 aborts the load.
  pub fn strict_utf8(&self) -> bool {
    self.words.strict_utf8
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `words.path` is not empty
  /// - `words.path` is not a directory
  ///
  /// Whether the file exists is left to the loader, which reports the IO error.
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.words.path.as_os_str().is_empty() {
      return Err(ConfigError::EmptyWordListPath);
    }

    if self.words.path.is_dir() {
      return Err(ConfigError::WordListPathIsDirectory {
        path: self.words.path.clone(),
      });
    }

    Ok(())
  }
}

impl Default for WordcheckConfig {
  fn default() -> Self {
    Self::with_words_path(DEFAULT_WORDS_PATH)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
