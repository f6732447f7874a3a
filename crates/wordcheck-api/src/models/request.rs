//! リクエストモデル定義

/// クエリパラメータ名
pub const WORD_PARAM: &str = "word";

/// 単語検証リクエスト（クエリパラメータ）
///
/// `word` が無い場合は空文字列として扱う。
#[derive(Debug, Default)]
pub struct WordQuery {
  /// 検証対象の単語
  pub word: String,
}

impl WordQuery {
  /// デコード済みの `key=value` の組から作成する（最初の `word` を採用）
  #[must_use]
  pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
    let word = pairs
      .into_iter()
      .find_map(|(key, value)| (key == WORD_PARAM).then_some(value))
      .unwrap_or_default();
    Self { word }
  }
}
