//! APIエラー定義

use thiserror::Error;

// wordcheck クレートのエラー型をインポート
use wordcheck::errors::WordcheckError;

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 設定エラー
  Config,
  /// 単語リストの読み込みエラー
  WordList,
  /// 内部エラー
  Internal,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Config => "config_error",
      Self::WordList => "word_list_error",
      Self::Internal => "internal_error",
    }
  }
}

/// APIエラー
///
/// 単語の検証そのものは失敗しない（未知の単語は `valid: false`）。
/// ここに現れるのは起動時とサーバー実行時のエラーのみで、
/// HTTP レスポンスには変換されない。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),

  /// 単語リストの読み込みエラー
  #[error("単語リストを読み込めません: {0}")]
  WordList(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Config(_) => ApiErrorKind::Config,
      Self::WordList(_) => ApiErrorKind::WordList,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// 単語リストエラーを作成
  #[must_use]
  pub fn word_list(message: impl Into<String>) -> Self {
    Self::WordList(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }
}

/// WordcheckError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<WordcheckError> for ApiError {
  fn from(err: WordcheckError) -> Self {
    match err {
      WordcheckError::Config(err) => ApiError::config(err.to_string()),
      WordcheckError::Load(err) => ApiError::word_list(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
