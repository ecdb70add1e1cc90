// initコマンドハンドラー
//
// デフォルト設定ファイルのスキャフォールドを実装します。
// - プレースホルダー値入りの config.yaml の生成
// - 既存設定ファイルの検出と上書きガード（--force）

use crate::core::config::Config;
use crate::core::error::IoError;
use crate::services::config_serializer::ConfigSerializer;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// initコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct InitCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 既存の設定ファイルを上書きする
    pub force: bool,
}

/// initコマンドハンドラー
#[derive(Debug, Clone)]
pub struct InitCommandHandler {}

impl InitCommandHandler {
    /// 新しいInitCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// initコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - initコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時はOk(())、失敗時はエラーメッセージ
    pub fn execute(&self, command: &InitCommand) -> Result<()> {
        let config_path = command.project_path.join(Config::DEFAULT_CONFIG_PATH);

        // 既存設定の上書きガード
        if self.is_already_initialized(&command.project_path) && !command.force {
            return Err(anyhow!(
                "Config file already exists: {}. Use --force option to overwrite it.",
                config_path.display()
            ));
        }

        self.generate_config_file(&config_path)
    }

    /// 設定ファイルが既に存在するかチェック
    pub fn is_already_initialized(&self, project_path: &Path) -> bool {
        project_path.join(Config::DEFAULT_CONFIG_PATH).is_file()
    }

    /// デフォルト設定ファイルを生成
    ///
    /// プレースホルダー値（YOUR_WIFI_SSIDなど）は人間が編集すべき箇所を
    /// 示す規約で、そのまま書き出します。
    ///
    /// # Arguments
    ///
    /// * `config_path` - 書き出す設定ファイルのパス
    pub fn generate_config_file(&self, config_path: &Path) -> Result<()> {
        // YAMLにシリアライズ
        let yaml = ConfigSerializer::to_yaml(&Config::default())?;

        // ファイルに書き込み
        fs::write(config_path, yaml).map_err(|e| IoError::FileWrite {
            path: config_path.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for InitCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
