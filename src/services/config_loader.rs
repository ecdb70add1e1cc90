// 設定ファイル読み込みサービス
//
// core::config の純粋性を保つため、ファイルI/Oはこのサービスに集約する。

use crate::core::config::Config;
use crate::core::error::{ConfigError, IoError};
use anyhow::Result;
use std::path::Path;

/// 設定ファイル読み込みサービス
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// YAMLファイルから設定を読み込む
    ///
    /// ファイルが存在しない場合は `ConfigError::Missing`、読み込み失敗は
    /// `IoError::FileRead`、解析失敗は `ConfigError::Parse` として返す。
    pub fn from_file(path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Err(ConfigError::Missing {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| IoError::FileRead {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        let config: Config = content.parse()?;
        Ok(config)
    }
}
