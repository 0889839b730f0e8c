use crate::error::{UploadCliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 環境変数で保存済みのエンドポイントを上書きできる
pub const ENDPOINT_ENV: &str = "OCR_UPLOAD_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/api/upload/".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| UploadCliError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ocr-upload").join("config.json"))
    }

    /// 実際に使うエンドポイント（環境変数を優先）
    pub fn effective_endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.is_empty() => endpoint,
            _ => self.endpoint.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(UploadCliError::Config(format!(
                "エンドポイントは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(UploadCliError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_endpoint("https://ocr.example.com/api/upload/".into()).unwrap();
        config.set_timeout(30).unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.endpoint, "https://ocr.example.com/api/upload/");
        assert_eq!(loaded.timeout_seconds, 30);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 5}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.endpoint, Config::default().endpoint);
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_set_endpoint_rejects_non_http() {
        let mut config = Config::default();
        let err = config.set_endpoint("ftp://example.com".into()).unwrap_err();
        assert!(matches!(err, UploadCliError::Config(_)));
        assert_eq!(config.endpoint, Config::default().endpoint);
    }

    #[test]
    fn test_set_timeout_rejects_zero() {
        let mut config = Config::default();
        assert!(config.set_timeout(0).is_err());
    }
}
