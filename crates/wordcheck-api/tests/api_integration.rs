//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! メモリ上で構築したトライを使用するため、単語リストのファイルは不要。

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use wordcheck::LineEnding;
use wordcheck::config::LogLevel;
use wordcheck_api::{
  api::{AppState, create_router},
  config::Config,
  service::{WordcheckApiService, WordcheckApiServiceFull},
};

fn test_config() -> Config {
  Config {
    bind_addr: "127.0.0.1:0".to_string(),
    words_path: "words.txt".into(),
    line_ending: LineEnding::StripCr,
    skip_blank_lines: false,
    strict_utf8: false,
    log_level: LogLevel::Info,
  }
}

/// テスト用の Router を構築する
fn test_app(words: &[&str]) -> Router {
  let service: Arc<dyn WordcheckApiService> =
    Arc::new(WordcheckApiServiceFull::from_trie(words.iter().collect()));
  create_router(AppState::new(test_config(), service))
}

/// GET リクエストを送り、ステータスと JSON ボディを返す
async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
  let response = app
    .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  let status = response.status();
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  let json = serde_json::from_slice(&body_bytes).expect("body should be valid json");
  (status, json)
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let app = test_app(&[]);

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn known_word_is_valid() {
  let (status, json) = get_json(test_app(&["cat", "car", "dog"]), "/v1/word/valid?word=dog").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json, serde_json::json!({ "valid": true }));
}

#[tokio::test]
async fn unknown_word_and_prefix_are_not_valid() {
  for uri in [
    "/v1/word/valid?word=ca",
    "/v1/word/valid?word=catdog",
    "/v1/word/valid?word=bird",
  ] {
    let (status, json) = get_json(test_app(&["cat", "car", "dog"]), uri).await;

    // 未知の単語はエラーではなく 200 + valid: false
    assert_eq!(status, StatusCode::OK, "uri: {uri}");
    assert_eq!(json["valid"], false, "uri: {uri}");
  }
}

#[tokio::test]
async fn percent_encoded_unicode_word() {
  let app = test_app(&["café"]);
  let (_, json) = get_json(app, "/v1/word/valid?word=caf%C3%A9").await;
  assert_eq!(json["valid"], true);

  // 分解形（e + 結合アキュート）は別の文字列
  let app = test_app(&["café"]);
  let (_, json) = get_json(app, "/v1/word/valid?word=cafe%CC%81").await;
  assert_eq!(json["valid"], false);
}

#[tokio::test]
async fn invalid_utf8_escape_is_not_valid() {
  // %FF は U+FFFD に置き換えてデコードされる
  let (status, json) = get_json(test_app(&["cat"]), "/v1/word/valid?word=%FF").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["valid"], false);
}

#[tokio::test]
async fn first_word_parameter_wins() {
  let (_, json) = get_json(test_app(&["cat"]), "/v1/word/valid?word=cat&word=dog").await;
  assert_eq!(json["valid"], true);

  let (_, json) = get_json(test_app(&["cat"]), "/v1/word/valid?word=dog&word=cat").await;
  assert_eq!(json["valid"], false);
}

// ============================================================================
// 空文字列・パラメータ欠落
// ============================================================================

#[tokio::test]
async fn missing_word_parameter_is_empty_string() {
  let (status, json) = get_json(test_app(&["cat"]), "/v1/word/valid").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["valid"], false);
}

#[tokio::test]
async fn empty_word_is_valid_only_when_inserted() {
  let (_, json) = get_json(test_app(&["cat"]), "/v1/word/valid?word=").await;
  assert_eq!(json["valid"], false);

  let (_, json) = get_json(test_app(&["cat", ""]), "/v1/word/valid?word=").await;
  assert_eq!(json["valid"], true);
}

#[tokio::test]
async fn empty_dictionary_rejects_everything() {
  for uri in ["/v1/word/valid?word=anything", "/v1/word/valid?word="] {
    let (_, json) = get_json(test_app(&[]), uri).await;
    assert_eq!(json["valid"], false, "uri: {uri}");
  }
}

// ============================================================================
// ルーティング
// ============================================================================

#[tokio::test]
async fn unknown_route_returns_404() {
  let app = test_app(&["cat"]);

  let response = app
    .oneshot(Request::builder().uri("/v1/word/invalid").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_requests_share_one_trie() {
  let service: Arc<dyn WordcheckApiService> = Arc::new(WordcheckApiServiceFull::from_trie(
    (0..500).map(|i| format!("w{i}")).collect(),
  ));
  let app = create_router(AppState::new(test_config(), service));

  let tasks: Vec<_> = (0..1_000)
    .map(|i| {
      let app = app.clone();
      tokio::spawn(async move {
        let (_, json) = get_json(app, &format!("/v1/word/valid?word=w{i}")).await;
        (i, json["valid"].as_bool().expect("valid is a bool"))
      })
    })
    .collect();

  for task in tasks {
    let (i, valid) = task.await.expect("task should finish");
    assert_eq!(valid, i < 500, "w{i}");
  }
}
