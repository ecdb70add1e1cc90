// checkコマンドハンドラー
//
// ヘッダーを書き出さずに設定を検証します。
// - 設定の読み込みと妥当性検証
// - スキャフォールドのプレースホルダー値が残っている箇所の警告

use crate::core::naming;
use crate::services::config_loader::ConfigLoader;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// checkコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルパスの上書き（オプション）
    pub config_path: Option<PathBuf>,
}

/// checkコマンドハンドラー
#[derive(Debug, Clone)]
pub struct CheckCommandHandler {}

impl CheckCommandHandler {
    /// 新しいCheckCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// checkコマンドを実行
    ///
    /// # Returns
    ///
    /// 成功時は検証結果のレポート、失敗時はエラーメッセージ
    pub fn execute(&self, command: &CheckCommand) -> Result<String> {
        use std::fmt::Write;

        let config_path = match &command.config_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => command.project_path.join(path),
            None => command.project_path.join(naming::CONFIG_FILE),
        };

        let config = ConfigLoader::from_file(&config_path)?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", config_path.display()))?;

        let mut output = String::new();

        // プレースホルダー警告（エラーではない）
        let placeholders = config.placeholder_fields();
        if !placeholders.is_empty() {
            for field in &placeholders {
                writeln!(
                    &mut output,
                    "  {} {}",
                    "⚠".yellow(),
                    format!("{} still has the scaffold placeholder value", field).yellow()
                )
                .unwrap();
            }
            writeln!(
                &mut output,
                "{}",
                "Edit config.yaml with your settings before generating the header.".yellow()
            )
            .unwrap();
        }

        write!(
            &mut output,
            "{}",
            format!("Config OK: {}", config_path.display()).green()
        )
        .unwrap();

        Ok(output)
    }
}

impl Default for CheckCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
