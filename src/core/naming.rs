// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "confgen";

/// 既定の設定ファイル名（プロジェクトルート直下）
pub const CONFIG_FILE: &str = "config.yaml";

/// 既定の生成ヘッダーパス（プロジェクトルートからの相対パス）
pub const HEADER_FILE: &str = "src/config.h";

/// バイナリ名
pub const BINARY_NAME: &str = "confgen";
