// ヘッダー生成サービス
//
// 設定をJSONドキュメントにエンコードし、そのドキュメントをさらにJSON文字列
// リテラルとして二重エンコードした上で、インクルードガード付きのCヘッダーを
// 組み立てます。生成物は config.yaml の編集と再実行でのみ更新されます。

use crate::core::config::Config;
use crate::services::config_checksum::ConfigChecksumService;
use anyhow::{Context, Result};
use std::fmt::Write;

/// ヘッダー生成サービス
#[derive(Debug, Clone)]
pub struct HeaderRenderer {}

impl HeaderRenderer {
    /// 新しいHeaderRendererを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 設定から生成ヘッダーの全文を組み立てる
    ///
    /// # Arguments
    ///
    /// * `config` - ヘッダーに埋め込む設定
    ///
    /// # Returns
    ///
    /// ヘッダーファイルの全文。埋め込まれた文字列リテラルをJSONとして
    /// 復号すると、元の設定マッピングを再構築するJSONドキュメントが得られます。
    pub fn render(&self, config: &Config) -> Result<String> {
        let json = serde_json::to_string(config)
            .with_context(|| "Failed to encode config as JSON")?;

        // JSONドキュメント自体をもう一度JSON文字列としてエンコードし、
        // エスケープ済みのリテラルを得る（二重エンコード）
        let literal = serde_json::to_string(&json)
            .with_context(|| "Failed to encode JSON document as a string literal")?;

        let checksum = ConfigChecksumService::new().calculate_checksum(&json);

        let mut output = String::new();
        writeln!(&mut output, "#ifndef CONFIG_H").unwrap();
        writeln!(&mut output, "#define CONFIG_H").unwrap();
        writeln!(&mut output).unwrap();
        writeln!(&mut output, "#include <Arduino.h>").unwrap();
        writeln!(&mut output).unwrap();
        writeln!(&mut output, "// Auto-generated config file - DO NOT EDIT").unwrap();
        writeln!(&mut output, "// Edit config.yaml instead").unwrap();
        writeln!(&mut output).unwrap();
        writeln!(&mut output, "const char* CONFIG_JSON = {};", literal).unwrap();
        writeln!(&mut output).unwrap();
        writeln!(&mut output, "const char* CONFIG_SHA256 = \"{}\";", checksum).unwrap();
        writeln!(&mut output).unwrap();
        writeln!(&mut output, "#endif // CONFIG_H").unwrap();

        Ok(output)
    }
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}
