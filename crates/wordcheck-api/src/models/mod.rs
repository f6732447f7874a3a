//! モデルモジュール

mod request;
mod response;

pub use request::{WORD_PARAM, WordQuery};
pub use response::WordValidityResponse;
