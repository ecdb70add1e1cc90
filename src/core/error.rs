// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、ConfigError, IoError を定義します。

use thiserror::Error;

/// 設定エラー
///
/// 設定ファイルの読み込み・解析時に発生するエラーを表現します。
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Config file missing
    #[error("Config file not found: {path}")]
    Missing {
        /// 設定ファイルパス
        path: String,
    },

    /// Config parse error
    #[error("Failed to parse config file: {cause}")]
    Parse {
        /// エラー原因
        cause: String,
    },
}

impl ConfigError {
    /// 設定ファイル欠落エラーかどうか
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Missing { .. })
    }

    /// 解析エラーかどうか
    pub fn is_parse(&self) -> bool {
        matches!(self, ConfigError::Parse { .. })
    }
}

/// I/Oエラー
///
/// ファイル操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// File write error
    #[error("Failed to write file: {path} (cause: {cause})")]
    FileWrite {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// Directory creation error
    #[error("Failed to create directory: {path} (cause: {cause})")]
    DirectoryCreate {
        /// ディレクトリパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, IoError::FileRead { .. })
    }

    /// ファイル書き込みエラーかどうか
    pub fn is_file_write(&self) -> bool {
        matches!(self, IoError::FileWrite { .. })
    }

    /// ディレクトリ作成エラーかどうか
    pub fn is_directory_create(&self) -> bool {
        matches!(self, IoError::DirectoryCreate { .. })
    }
}
