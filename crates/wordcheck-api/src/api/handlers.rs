//! HTTPハンドラー定義

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use tracing::debug;

use crate::models::{WordQuery, WordValidityResponse};

use super::state::AppState;

/// GET /v1/word/valid エンドポイント
///
/// 単語が辞書に含まれているかを返す。
///
/// # Query
/// - `word`: 検証対象の単語（省略時は空文字列）
///
/// # Response
/// - 200 OK: `{"valid": true}` または `{"valid": false}`
///
/// 未知の単語はエラーではなく `valid: false` として返す。
/// `word` が複数指定された場合は最初の値を使う。
pub async fn get_word_valid(
  State(state): State<AppState>,
  query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<WordValidityResponse> {
  let query = match query {
    Ok(Query(pairs)) => WordQuery::from_pairs(pairs),
    Err(rejection) => {
      debug!(error = %rejection, "クエリを解析できないため空文字列として扱う");
      WordQuery::default()
    }
  };

  // メモリ上の探索のみ。ブロッキングしない
  let response = state.service.check(&query);

  debug!(
    word_len = query.word.chars().count(),
    valid = response.valid,
    "単語検証リクエストを処理"
  );

  Json(response)
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
