//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use wordcheck::config::{DEFAULT_WORDS_PATH, LogLevel, LoggingConfig, WordListConfig};
use wordcheck::{LineEnding, WordcheckConfig};

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_LINE_ENDING, ENV_LOG_LEVEL, ENV_SKIP_BLANK_LINES,
  ENV_STRICT_UTF8, ENV_WORDS_PATH,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8080")
  pub bind_addr: String,
  /// Word list path
  pub words_path: PathBuf,
  /// Line policy for the word list
  pub line_ending: LineEnding,
  /// Drop blank lines of the word list
  pub skip_blank_lines: bool,
  /// Refuse a word list containing invalid UTF-8
  pub strict_utf8: bool,
  /// Default log level
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Unset variables fall back to their defaults.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let words_path =
      lookup(ENV_WORDS_PATH).map_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH), PathBuf::from);

    let line_ending = match lookup(ENV_LINE_ENDING) {
      Some(value) => LineEnding::from_str(&value).map_err(ApiError::config)?,
      None => LineEnding::default(),
    };

    let skip_blank_lines = match lookup(ENV_SKIP_BLANK_LINES) {
      Some(value) => parse_bool(ENV_SKIP_BLANK_LINES, &value)?,
      None => false,
    };

    let strict_utf8 = match lookup(ENV_STRICT_UTF8) {
      Some(value) => parse_bool(ENV_STRICT_UTF8, &value)?,
      None => false,
    };

    let log_level = match lookup(ENV_LOG_LEVEL) {
      Some(value) => LogLevel::from_str(&value).map_err(ApiError::config)?,
      None => LogLevel::default(),
    };

    Ok(Self {
      bind_addr,
      words_path,
      line_ending,
      skip_blank_lines,
      strict_utf8,
      log_level,
    })
  }

  /// Builds the configuration of the wordcheck library
  #[must_use]
  pub fn wordcheck_config(&self) -> WordcheckConfig {
    WordcheckConfig {
      words: WordListConfig {
        path: self.words_path.clone(),
        line_ending: self.line_ending,
        skip_blank_lines: self.skip_blank_lines,
        strict_utf8: self.strict_utf8,
      },
      logging: LoggingConfig {
        level: self.log_level,
      },
    }
  }
}

fn parse_bool(key: &str, value: &str) -> crate::errors::Result<bool> {
  match value.to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(ApiError::config(format!(
      "Invalid boolean for {}: {}. Valid values: true, false",
      key, value
    ))),
  }
}
