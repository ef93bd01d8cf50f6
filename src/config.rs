use crate::error::{NeuroScanError, Result};
use neuroscan_common::{Mode, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "NEUROSCAN_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub demo_mode: bool,
    /// None ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            demo_mode: false,
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NeuroScanError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("neuroscan").join("config.json"))
    }

    /// 使用するエンドポイント
    ///
    /// 優先順位: 引数（--endpoint） > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        if let Some(endpoint) = flag {
            return endpoint.to_string();
        }
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => endpoint,
            _ => self.endpoint.clone(),
        }
    }

    /// `--demo` が指定されるか設定でデモが有効ならデモモード
    pub fn mode(&self, demo_flag: bool) -> Mode {
        Mode::from_demo_flag(demo_flag || self.demo_mode)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let trimmed = endpoint.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(NeuroScanError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }
        self.endpoint = trimmed.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:5000/predict");
        assert!(!config.demo_mode);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"demo_mode": true}"#).unwrap();
        assert!(config.demo_mode);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_flag_overrides_everything() {
        let config = Config::default();
        assert_eq!(
            config.resolve_endpoint(Some("http://10.0.0.2:5000/predict")),
            "http://10.0.0.2:5000/predict"
        );
    }

    #[test]
    fn test_mode_from_flag_or_config() {
        let mut config = Config::default();
        assert_eq!(config.mode(false), Mode::Live);
        assert_eq!(config.mode(true), Mode::Demo);
        config.demo_mode = true;
        assert_eq!(config.mode(false), Mode::Demo);
    }

    #[test]
    fn test_set_endpoint_validates_scheme() {
        let mut config = Config::default();
        assert!(config.set_endpoint("ftp://host/predict".into()).is_err());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        config.set_endpoint(" https://scan.example.com/predict ".into()).unwrap();
        assert_eq!(config.endpoint, "https://scan.example.com/predict");
    }
}
