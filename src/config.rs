//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long a notice stays in the status bar unless configured
const DEFAULT_NOTICE_TTL_MS: u64 = 3000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Show the password in clear text on start
    pub show_password: Option<bool>,
    /// Ask before deleting a record
    pub confirm_delete: Option<bool>,
    /// Notice lifetime in milliseconds
    pub notice_ttl_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "regform", "regform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn show_password(&self) -> bool {
        self.show_password.unwrap_or(false)
    }

    pub fn confirm_delete(&self) -> bool {
        self.confirm_delete.unwrap_or(true)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms.unwrap_or(DEFAULT_NOTICE_TTL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "regform-tui-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.show_password.is_none());
        assert!(config.confirm_delete.is_none());
        assert!(config.notice_ttl_ms.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = TuiConfig::default();
        assert!(!config.show_password());
        assert!(config.confirm_delete());
        assert_eq!(config.notice_ttl(), Duration::from_secs(3));
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            show_password: Some(true),
            confirm_delete: Some(false),
            notice_ttl_ms: Some(500),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.show_password, Some(true));
        assert_eq!(parsed.confirm_delete, Some(false));
        assert_eq!(parsed.notice_ttl(), Duration::from_millis(500));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.confirm_delete());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"confirm_delete": false, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(!parsed.confirm_delete());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("regform-tui-does-not-exist.json");
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.show_password.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config("valid", r#"{"show_password": true}"#);
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.show_password());
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = temp_config("malformed", "{ not json");
        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("parsing config"));
    }
}
