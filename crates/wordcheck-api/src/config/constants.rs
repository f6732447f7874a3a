//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 全インターフェースのポート 8080 で待ち受ける。
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 単語検証エンドポイントのパス
pub const WORD_VALID_PATH: &str = "/v1/word/valid";

/// バインドアドレスの環境変数名
pub const ENV_BIND_ADDR: &str = "WORDCHECK_API_BASE_URL";

/// 単語リストのパスの環境変数名
pub const ENV_WORDS_PATH: &str = "WORDCHECK_WORDS_PATH";

/// 行末処理ポリシーの環境変数名
pub const ENV_LINE_ENDING: &str = "WORDCHECK_LINE_ENDING";

/// 空行スキップの環境変数名
pub const ENV_SKIP_BLANK_LINES: &str = "WORDCHECK_SKIP_BLANK_LINES";

/// 不正な UTF-8 の行で起動を失敗させるかの環境変数名
pub const ENV_STRICT_UTF8: &str = "WORDCHECK_STRICT_UTF8";

/// ログレベルの環境変数名（`RUST_LOG` が設定されていればそちらが優先）
pub const ENV_LOG_LEVEL: &str = "WORDCHECK_LOG_LEVEL";
