//! Response Model Definition

use serde::Serialize;

/// Word validity response: `{"valid": <bool>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordValidityResponse {
  /// Whether the word is in the dictionary
  pub valid: bool,
}
