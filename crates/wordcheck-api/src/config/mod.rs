//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_LINE_ENDING, ENV_LOG_LEVEL, ENV_SKIP_BLANK_LINES,
  ENV_STRICT_UTF8, ENV_WORDS_PATH, WORD_VALID_PATH,
};
pub use env::Config;
