use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::{errors::AppError, telemetry::TelemetrySettings};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Vault,
    Memory,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct VaultSettings {
    pub url: String,
    pub search_url: String,
    // TODO: read from a secret store instead of plain config
    pub api_key: String,
    pub timeout_sec: u64,
}

impl Default for VaultSettings {
    fn default() -> Self {
        VaultSettings {
            url: String::new(),
            search_url: String::new(),
            api_key: String::new(),
            timeout_sec: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub connection_string: String,
    pub request_timeout_sec: u64,
    pub storage: StorageBackend,
    pub vault: VaultSettings,
    pub telemetry: TelemetrySettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            connection_string: String::new(),
            request_timeout_sec: 30,
            storage: StorageBackend::default(),
            vault: VaultSettings::default(),
            telemetry: TelemetrySettings::default(),
        }
    }
}

impl Config {
    pub fn get() -> Result<Config, AppError> {
        let mut config = config::Config::builder().add_source(
            File::new("./configuration/base.yaml", FileFormat::Yaml).required(false),
        );

        config = match std::env::var("CONFIG_FILE") {
            Ok(config_path) => {
                config.add_source(File::new(&config_path, FileFormat::Yaml).required(false))
            }
            Err(_) => config,
        };

        config = config.add_source(Environment::default().separator("__"));
        Ok(config.build()?.try_deserialize()?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Config, AppError> {
        let config = config::Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::LogFormat;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = Config::from_yaml("port: 9090").unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.storage, StorageBackend::Vault);
        assert_eq!(config.vault.timeout_sec, 10);
        assert!(config.vault.api_key.is_empty());
    }

    #[test]
    fn nested_sections_are_parsed() {
        let yaml = r#"
storage: memory
vault:
  url: http://vault/documents
  search_url: http://vault/documents/search
  api_key: secret
  timeout_sec: 3
telemetry:
  log_level: debug
  format: json
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.vault.search_url, "http://vault/documents/search");
        assert_eq!(config.vault.api_key, "secret");
        assert_eq!(config.vault.timeout_sec, 3);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    // the only test in the crate that touches the process environment
    #[test]
    fn environment_overrides_files_and_missing_config_file_is_tolerated() {
        std::env::set_var("CONFIG_FILE", "./configuration/does-not-exist.yaml");
        std::env::set_var("VAULT__API_KEY", "env-key");
        std::env::set_var("VAULT__TIMEOUT_SEC", "3");

        let config = Config::get();

        std::env::remove_var("CONFIG_FILE");
        std::env::remove_var("VAULT__API_KEY");
        std::env::remove_var("VAULT__TIMEOUT_SEC");

        let config = config.unwrap();
        assert_eq!(config.vault.api_key, "env-key");
        assert_eq!(config.vault.timeout_sec, 3);
    }

    #[test]
    fn malformed_values_are_config_errors() {
        let err = Config::from_yaml("port: not-a-number").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
