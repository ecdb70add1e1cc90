// 設定ファイル管理
//
// ファームウェアが消費する設定ドキュメント（YAML形式）のモデルを提供します。
// トップレベルは wifi / logger の2セクションのみのフラットなマッピングです。

use crate::core::error::ConfigError;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// スキャフォールド時のWiFi SSIDプレースホルダー
pub const PLACEHOLDER_SSID: &str = "YOUR_WIFI_SSID";

/// スキャフォールド時のWiFiパスワードプレースホルダー
pub const PLACEHOLDER_PASSWORD: &str = "YOUR_WIFI_PASSWORD";

/// 既定のホスト名
pub const DEFAULT_HOSTNAME: &str = "GPS-ESP32";

/// 既定のログサーバーアドレス
pub const DEFAULT_LOG_SERVER: &str = "192.168.1.100";

/// 既定のログサーバーポート
pub const DEFAULT_LOG_PORT: u16 = 8080;

/// ファームウェア設定
///
/// フィールドの宣言順はそのまま生成ヘッダーのJSONフィールド順になります。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// WiFi接続設定
    pub wifi: WifiConfig,

    /// ログ送信先設定
    pub logger: LoggerConfig,
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = crate::core::naming::CONFIG_FILE;

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.wifi.ssid.is_empty() {
            return Err(anyhow!("WiFi SSID is not specified"));
        }

        if self.wifi.hostname.is_empty() {
            return Err(anyhow!("WiFi hostname is not specified"));
        }

        if self.logger.server.is_empty() {
            return Err(anyhow!("Logger server address is not specified"));
        }

        Ok(())
    }

    /// スキャフォールドのプレースホルダー値が残っているフィールドを列挙
    ///
    /// プレースホルダーは「人間が編集すべき箇所」を示す規約なので、
    /// そのままヘッダーに焼き込む前に警告できるようにします。
    pub fn placeholder_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();

        if self.wifi.ssid == PLACEHOLDER_SSID {
            fields.push("wifi.ssid");
        }
        if self.wifi.password == PLACEHOLDER_PASSWORD {
            fields.push("wifi.password");
        }

        fields
    }
}

/// スキャフォールドで書き出される既定値
impl Default for Config {
    fn default() -> Self {
        Self {
            wifi: WifiConfig {
                ssid: PLACEHOLDER_SSID.to_string(),
                password: PLACEHOLDER_PASSWORD.to_string(),
                hostname: DEFAULT_HOSTNAME.to_string(),
            },
            logger: LoggerConfig {
                server: DEFAULT_LOG_SERVER.to_string(),
                port: DEFAULT_LOG_PORT,
            },
        }
    }
}

/// std::str::FromStrトレイトの実装
impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse {
            cause: e.to_string(),
        })
    }
}

/// WiFi接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiConfig {
    /// 接続先SSID
    pub ssid: String,

    /// 接続パスワード
    pub password: String,

    /// デバイスのホスト名
    pub hostname: String,
}

/// ログ送信先設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// ログサーバーのアドレス
    pub server: String,

    /// ログサーバーのポート番号
    pub port: u16,
}
