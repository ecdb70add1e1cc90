// Confgenライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインロジック（設定モデル、エラー型、命名ポリシー）
// - services: 設定ファイルの読み書きとヘッダー生成サービス

pub mod cli;
pub mod core;
pub mod services;
