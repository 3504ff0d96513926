//! # Token Stores
//!
//! The bearer token is read once, when [`TalkieSystem`](crate::lifecycle::TalkieSystem)
//! starts, from a plain key-value store. How the token got there (a login flow,
//! a script) is outside this crate.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read-only key-value access to stored credentials.
pub trait TokenStore: Send + Sync {
    /// The value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
}

/// In-memory store, for tests and for tokens passed through the environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// A JSON object on disk, e.g. `{ "token": "abc" }`.
///
/// The file is read on every call. A missing or unreadable file, or a non-string
/// value, reads as "no token".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<Map<String, Value>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Token file not readable");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Token file is not a JSON object");
                None
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn read(&self, key: &str) -> Option<String> {
        self.load()?
            .remove(key)
            .and_then(|value| value.as_str().map(str::to_string))
    }
}

/// Picks the store for a run: `TALKIE_TOKEN` when set, otherwise `token_file`.
pub fn from_env(token_key: &str, token_file: &Path) -> Box<dyn TokenStore> {
    match std::env::var(crate::config::TOKEN_ENV) {
        Ok(token) if !token.is_empty() => {
            debug!("Using bearer token from environment");
            Box::new(MemoryTokenStore::new().with(token_key, token))
        }
        _ => Box::new(FileTokenStore::new(token_file)),
    }
}
