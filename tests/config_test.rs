/// 設定モデルのテスト
///
/// このテストは、設定ファイルの読み込み、往復変換、検証が
/// 正しく動作することを確認します。

#[cfg(test)]
mod config_tests {
    use confgen::core::config::{Config, LoggerConfig, WifiConfig};
    use confgen::services::config_serializer::ConfigSerializer;

    /// Config構造体が正しくデシリアライズできることを確認
    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
wifi:
  ssid: home-network
  password: hunter2
  hostname: gps-tracker

logger:
  server: 10.0.0.5
  port: 9000
"#;

        let config: Config = serde_saphyr::from_str(yaml).unwrap();

        assert_eq!(config.wifi.ssid, "home-network");
        assert_eq!(config.wifi.password, "hunter2");
        assert_eq!(config.wifi.hostname, "gps-tracker");
        assert_eq!(config.logger.server, "10.0.0.5");
        assert_eq!(config.logger.port, 9000);
    }

    /// YAMLへの直列化と再解析で元の設定に戻ることを確認（往復変換）
    #[test]
    fn test_config_yaml_round_trip() {
        let config = Config {
            wifi: WifiConfig {
                ssid: "A".to_string(),
                password: "B".to_string(),
                hostname: "C".to_string(),
            },
            logger: LoggerConfig {
                server: "1.2.3.4".to_string(),
                port: 80,
            },
        };

        let yaml = ConfigSerializer::to_yaml(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();

        assert_eq!(parsed, config);
    }

    /// デフォルト設定も往復変換で保存されることを確認
    #[test]
    fn test_default_config_round_trip() {
        let config = Config::default();

        let yaml = ConfigSerializer::to_yaml(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();

        assert_eq!(parsed, config);
    }

    /// 必須フィールドがない場合のデシリアライズエラーを確認
    #[test]
    fn test_config_missing_required_field() {
        let yaml = r#"
wifi:
  ssid: home-network
  password: hunter2

logger:
  server: 10.0.0.5
  port: 9000
"#;

        // hostnameフィールドがないためデシリアライズに失敗することを期待
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    /// ポートが整数でない場合のデシリアライズエラーを確認
    #[test]
    fn test_config_invalid_port_type() {
        let yaml = r#"
wifi:
  ssid: home-network
  password: hunter2
  hostname: gps-tracker

logger:
  server: 10.0.0.5
  port: not-a-number
"#;

        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    /// デフォルト設定が固定のプレースホルダー値を持つことを確認
    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.wifi.ssid, "YOUR_WIFI_SSID");
        assert_eq!(config.wifi.password, "YOUR_WIFI_PASSWORD");
        assert_eq!(config.wifi.hostname, "GPS-ESP32");
        assert_eq!(config.logger.server, "192.168.1.100");
        assert_eq!(config.logger.port, 8080);
    }

    /// バリデーションが正しく動作することを確認
    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut invalid = Config::default();
        invalid.wifi.ssid = String::new();
        assert!(invalid.validate().is_err());

        let mut invalid = Config::default();
        invalid.logger.server = String::new();
        assert!(invalid.validate().is_err());
    }

    /// FromStrによる解析が不正なYAMLでエラーを返すことを確認
    #[test]
    fn test_config_from_str_malformed() {
        let result: Result<Config, _> = "wifi: [unterminated".parse::<Config>();
        assert!(result.is_err());
    }
}
