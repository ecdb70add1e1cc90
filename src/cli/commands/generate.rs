// generateコマンドハンドラー
//
// 設定のマテリアライズフローを実装します。
// - 設定ファイルの存在確認（無ければデフォルトをスキャフォールドして終了）
// - 設定の読み込みとJSONエンコード
// - インクルードガード付きヘッダーの書き出し

use crate::core::error::{ConfigError, IoError};
use crate::core::naming;
use crate::services::config_loader::ConfigLoader;
use crate::services::header_renderer::HeaderRenderer;
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// generateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルパスの上書き（オプション）
    pub config_path: Option<PathBuf>,
    /// 生成ヘッダーパスの上書き（オプション）
    pub output_path: Option<PathBuf>,
}

/// generateコマンドハンドラー
#[derive(Debug, Clone)]
pub struct GenerateCommandHandler {}

impl GenerateCommandHandler {
    /// 新しいGenerateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// generateコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - generateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時はステータスメッセージ、失敗時はエラーメッセージ
    pub fn execute(&self, command: &GenerateCommand) -> Result<String> {
        let config_path = self.resolve_config_path(command);
        let header_path = self.resolve_header_path(command);

        // 設定ファイルが無ければデフォルトをスキャフォールドして終了する。
        // このパスではヘッダーファイルには一切手を付けない。
        if !config_path.is_file() {
            println!(
                "{}",
                format!("Config file not found: {}", config_path.display()).yellow()
            );
            self.scaffold_default_config(&config_path)?;
            println!(
                "{}",
                "Created default config file. Please edit it with your settings.".yellow()
            );
            return Err(ConfigError::Missing {
                path: config_path.display().to_string(),
            }
            .into());
        }

        // 設定を読み込む
        let config = ConfigLoader::from_file(&config_path)?;

        // ヘッダーを組み立てて書き出す
        let renderer = HeaderRenderer::new();
        let header = renderer.render(&config)?;
        self.write_header(&header_path, &header)?;

        Ok("Config processed successfully".to_string())
    }

    /// 設定ファイルパスを解決
    fn resolve_config_path(&self, command: &GenerateCommand) -> PathBuf {
        match &command.config_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => command.project_path.join(path),
            None => command.project_path.join(naming::CONFIG_FILE),
        }
    }

    /// 生成ヘッダーパスを解決
    fn resolve_header_path(&self, command: &GenerateCommand) -> PathBuf {
        match &command.output_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => command.project_path.join(path),
            None => command.project_path.join(naming::HEADER_FILE),
        }
    }

    /// デフォルト設定ファイルをスキャフォールド
    fn scaffold_default_config(&self, config_path: &Path) -> Result<()> {
        use crate::cli::commands::init::InitCommandHandler;

        InitCommandHandler::new().generate_config_file(config_path)
    }

    /// ヘッダーファイルを無条件に上書きする
    ///
    /// 親ディレクトリが無い場合は作成します。
    fn write_header(&self, header_path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = header_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| IoError::DirectoryCreate {
                    path: parent.display().to_string(),
                    cause: e.to_string(),
                })?;
            }
        }

        fs::write(header_path, contents).map_err(|e| {
            IoError::FileWrite {
                path: header_path.display().to_string(),
                cause: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for GenerateCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
