//! Configuration handling for the wizard

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default application endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/apply";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENDPOINT_ENV: &str = "LOAN_WIZARD_ENDPOINT";
const TIMEOUT_ENV: &str = "LOAN_WIZARD_TIMEOUT_SECS";

/// User configuration for the wizard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application submission endpoint
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "loan-wizard", "loan-wizard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        );
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    fn apply_overrides(&mut self, endpoint: Option<String>, timeout: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(timeout) = timeout {
            match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = Some(secs),
                _ => tracing::warn!(value = %timeout, "ignoring invalid {TIMEOUT_ENV}"),
            }
        }
    }

    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Request timeout; a zero from the config file falls back to the default
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig {
            endpoint: Some("https://lending.example.com/apply".to_string()),
            request_timeout_secs: Some(10),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("https://lending.example.com/apply".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://localhost/apply", "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint(), "http://localhost/apply");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = AppConfig {
            endpoint: Some("http://file/apply".to_string()),
            request_timeout_secs: Some(5),
        };
        config.apply_overrides(Some("http://env/apply".to_string()), Some("12".to_string()));
        assert_eq!(config.endpoint(), "http://env/apply");
        assert_eq!(config.request_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("  ".to_string()), Some("soon".to_string()));
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_zero_timeout_override_is_ignored() {
        let mut config = AppConfig {
            endpoint: None,
            request_timeout_secs: Some(5),
        };
        config.apply_overrides(None, Some("0".to_string()));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));

        config.request_timeout_secs = Some(0);
        assert_eq!(
            config.request_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "loan-wizard-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"request_timeout_secs": 3}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "loan-wizard-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();

        let result = AppConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
