// 設定チェックサム計算サービス
//
// JSONエンコード済み設定ドキュメントのSHA-256ハッシュを計算します。
// ファームウェアは CONFIG_SHA256 定数の比較で設定の変化を検出できます。

use sha2::{Digest, Sha256};

/// 設定チェックサムサービス
#[derive(Debug, Clone)]
pub struct ConfigChecksumService {}

impl ConfigChecksumService {
    /// 新しいConfigChecksumServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// JSONドキュメントのチェックサムを計算
    ///
    /// # Arguments
    ///
    /// * `json` - チェックサムを計算するJSONドキュメント
    ///
    /// # Returns
    ///
    /// SHA-256ハッシュ（64文字の16進数文字列）
    pub fn calculate_checksum(&self, json: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        format!("{:x}", result)
    }
}

impl Default for ConfigChecksumService {
    fn default() -> Self {
        Self::new()
    }
}
