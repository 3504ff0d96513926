//! Configuration for the talkie client.
//!
//! Everything has a default, so a missing config file is not an error. Values come
//! from, in increasing priority: built-in defaults, a camelCase JSON file, and the
//! `TALKIE_BASE_URL` environment variable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const BASE_URL_ENV: &str = "TALKIE_BASE_URL";

/// Environment variable holding a bearer token; read ahead of the token file.
pub const TOKEN_ENV: &str = "TALKIE_TOKEN";

fn default_base_url() -> String {
    "https://www.talkietotz.com".to_string()
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_token_file() -> PathBuf {
    PathBuf::from(".talkie/storage.json")
}

const fn default_channel_buffer() -> usize {
    32
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_true() -> bool {
    true
}

/// Errors raised while loading or checking a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// API root; resource paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Key of the bearer token inside the token store.
    #[serde(default = "default_token_key")]
    pub token_key: String,

    /// JSON file backing the token store.
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,

    /// Request channel capacity of each resource actor.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Load both collections right after start-up.
    #[serde(default = "default_true")]
    pub prefetch: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_key: default_token_key(),
            token_file: default_token_file(),
            channel_buffer: default_channel_buffer(),
            request_timeout_secs: default_request_timeout(),
            prefetch: default_true(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `path`, then applies environment overrides.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file holds invalid JSON and
    /// `ConfigError::Invalid` if the resulting values fail [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` without looking at the environment.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Applies overrides from `lookup` (normally the process environment).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
    }

    /// Checks that:
    /// - `base_url` is not empty
    /// - `channel_buffer` is greater than 0
    /// - `request_timeout_secs` is greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("baseUrl must not be empty".into()));
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid("channelBuffer must be greater than 0".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "requestTimeoutSecs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_file(&dir.path().join("talkie.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "https://www.talkietotz.com");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.channel_buffer, 32);
        assert!(config.prefetch);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "baseUrl": "http://localhost:4000", "prefetch": false }}"#).unwrap();

        let config = ClientConfig::load_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert!(!config.prefetch);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ClientConfig::load_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_overrides_base_url() {
        let mut config = ClientConfig::default();
        config.apply_overrides(|key| (key == BASE_URL_ENV).then(|| "http://127.0.0.1:1".to_string()));
        assert_eq!(config.base_url, "http://127.0.0.1:1");

        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.base_url, "http://127.0.0.1:1");
    }

    #[test]
    fn validation_rejects_zero_values() {
        let mut config = ClientConfig {
            channel_buffer: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.channel_buffer = 1;
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 1;
        config.base_url = " ".into();
        assert!(config.validate().is_err());
    }
}
