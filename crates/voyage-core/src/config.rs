use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory (also holds the log file)
    pub config_dir: PathBuf,

    /// Travel backend settings
    pub services: ServiceConfig,

    /// Weather and exchange-rate providers
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Terminal UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the travel REST API, including the `/api` prefix
    pub api_url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// OpenWeatherMap-compatible endpoint root
    pub weather_api_url: String,
    pub weather_api_key: String,
    /// Unit system passed through to the weather provider
    pub units: String,
    /// Language for weather descriptions
    pub lang: String,
    /// Exchange-rate endpoint root (`<root>/latest/<base>`)
    pub exchange_api_url: String,
    /// Currency the displayed rates are relative to
    pub base_currency: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            weather_api_url: "https://api.openweathermap.org/data/2.5".to_string(),
            weather_api_key: "demo".to_string(),
            units: "metric".to_string(),
            lang: "zh_tw".to_string(),
            exchange_api_url: "https://api.exchangerate-api.com/v4".to_string(),
            base_currency: "TWD".to_string(),
        }
    }
}

/// Tab shown when the UI starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    #[default]
    Map,
    Expenses,
    Packing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub start_tab: StartTab,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 200,
            start_tab: StartTab::Map,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("voyage");

        Self {
            config_dir,
            services: ServiceConfig {
                api_url: "http://localhost:5000/api".to_string(),
                request_timeout_secs: None,
            },
            lookup: LookupConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, writing defaults there on first use
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns an error if validation fails. Warnings are handed back so the
    /// caller can report them once logging is up.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.services.api_url, "services.api_url", &mut result);
        self.validate_url(
            &self.lookup.weather_api_url,
            "lookup.weather_api_url",
            &mut result,
        );
        self.validate_url(
            &self.lookup.exchange_api_url,
            "lookup.exchange_api_url",
            &mut result,
        );

        if self.services.request_timeout_secs == Some(0) {
            result.add_error(
                "services.request_timeout_secs",
                "Timeout must be greater than 0 (remove it to disable)",
            );
        }

        if self.lookup.base_currency.trim().is_empty() {
            result.add_error("lookup.base_currency", "Base currency must not be empty");
        }

        if self.lookup.weather_api_key.is_empty() || self.lookup.weather_api_key == "demo" {
            result.add_warning(
                "lookup.weather_api_key",
                "Weather API key is a placeholder - live weather will fall back to defaults",
            );
        }

        if self.ui.tick_rate_ms == 0 {
            result.add_error("ui.tick_rate_ms", "Tick rate must be greater than 0");
        } else if self.ui.tick_rate_ms > 5000 {
            result.add_warning("ui.tick_rate_ms", "Tick rate is unusually slow (>5s)");
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.port() == Some(0) {
                    result.add_error(field_name, "Port cannot be 0");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Write the configuration as TOML, creating the parent directory.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Path of the log file written by `crate::init`
    pub fn log_path(&self) -> PathBuf {
        self.config_dir.join("voyage.log")
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("voyage");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert_eq!(config.services.api_url, "http://localhost:5000/api");
        assert!(config.services.request_timeout_secs.is_none());
    }

    #[test]
    fn test_placeholder_api_key_is_warning() {
        let result = Config::default().validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "lookup.weather_api_key"));
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.services.api_url = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "services.api_url"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.lookup.exchange_api_url = "ftp://rates.example.com".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_zero_timeout_and_tick_rate_rejected() {
        let mut config = Config::default();
        config.services.request_timeout_secs = Some(0);
        config.ui.tick_rate_ms = 0;
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "services.request_timeout_secs"));
        assert!(result.errors.iter().any(|e| e.field == "ui.tick_rate_ms"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        assert_eq!(result.error_summary(), "field1: error1; field2: error2");
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voyage").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.lookup.base_currency, "TWD");
    }

    #[test]
    fn test_save_and_reload_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.services.api_url = "http://travel.local:8080/api".to_string();
        config.ui.start_tab = StartTab::Packing;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.services.api_url, "http://travel.local:8080/api");
        assert_eq!(reloaded.ui.start_tab, StartTab::Packing);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "config_dir = \"/tmp/voyage\"\n\n[services]\napi_url = \"http://localhost:5000/api\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 200);
        assert_eq!(config.lookup.units, "metric");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
