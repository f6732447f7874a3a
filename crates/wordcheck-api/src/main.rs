//! wordcheck-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wordcheck_api::ApiError;
use wordcheck_api::api::AppState;
use wordcheck_api::api::run_server;
use wordcheck_api::config::Config;
use wordcheck_api::service::WordcheckApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルを含むため、ロギングより先に行う）
  let config = Config::from_env()?;

  let wordcheck_config = config.wordcheck_config();

  // ロギングの初期化（RUST_LOG が設定されていればそちらを優先）
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(wordcheck_config.log_level().as_filter()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    words_path = %config.words_path.display(),
    line_ending = %config.line_ending,
    skip_blank_lines = config.skip_blank_lines,
    strict_utf8 = config.strict_utf8,
    "設定を読み込みました"
  );

  // 単語リストを読み込み、辞書を構築する（失敗した場合は起動しない）
  let service = WordcheckApiServiceFull::new(&config).inspect_err(|e| {
    tracing::error!(error = %e, "辞書の構築に失敗しました");
  })?;
  tracing::info!(words = service.word_count(), "辞書を構築しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, Arc::new(service));

  // サーバー起動
  run_server(state).await
}
