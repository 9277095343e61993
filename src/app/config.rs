use crate::error::ConfigError;
use crate::infrastructure::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_capture_timeout_ms")]
    pub capture_timeout_ms: u64,
    #[serde(default = "default_paste_delay_ms")]
    pub paste_delay_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// The JSON file written for the original GPT-Writer.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(rename = "AI_API_KEY")]
    ai_api_key: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_capture_timeout_ms() -> u64 {
    100
}

fn default_paste_delay_ms() -> u64 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            capture_timeout_ms: default_capture_timeout_ms(),
            paste_delay_ms: default_paste_delay_ms(),
            log_level: default_log_level(),
        }
    }

    /// Loads from the first of the user-scoped locations that exists.
    pub fn load() -> Result<Self, ConfigError> {
        let home = home::home_dir().ok_or_else(|| ConfigError::Missing(Vec::new()))?;
        Self::load_from(&config_path(&home), &legacy_config_path(&home))
    }

    pub fn load_from(primary: &Path, legacy: &Path) -> Result<Self, ConfigError> {
        let config = if primary.exists() {
            let content = read(primary)?;
            toml::from_str::<Config>(&content).map_err(|e| ConfigError::Invalid {
                path: primary.to_path_buf(),
                message: e.to_string(),
            })?
        } else if legacy.exists() {
            let content = read(legacy)?;
            let legacy_config =
                serde_json::from_str::<LegacyConfig>(&content).map_err(|e| {
                    ConfigError::Invalid {
                        path: legacy.to_path_buf(),
                        message: e.to_string(),
                    }
                })?;
            Config::with_api_key(legacy_config.ai_api_key)
        } else {
            return Err(ConfigError::Missing(vec![
                primary.to_path_buf(),
                legacy.to_path_buf(),
            ]));
        };

        config.validate(if primary.exists() { primary } else { legacy })
    }

    fn validate(self, path: &Path) -> Result<Self, ConfigError> {
        let invalid = |message: &str| ConfigError::Invalid {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        if self.api_key.trim().is_empty() {
            return Err(invalid("api_key is empty"));
        }
        if self.model.trim().is_empty() {
            return Err(invalid("model is empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs must be positive"));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(invalid("log_level must be one of off, error, warn, info, debug, trace"));
        }
        Ok(self)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn capture_timeout(&self) -> Duration {
        Duration::from_millis(self.capture_timeout_ms)
    }

    #[must_use]
    pub fn paste_delay(&self) -> Duration {
        Duration::from_millis(self.paste_delay_ms)
    }

    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[must_use]
pub fn config_dir(home: &Path) -> PathBuf {
    home.join(".config").join("gpt-writer")
}

#[must_use]
pub fn config_path(home: &Path) -> PathBuf {
    config_dir(home).join("config.toml")
}

#[must_use]
pub fn legacy_config_path(home: &Path) -> PathBuf {
    home.join("GPT-Writer").join("config")
}
