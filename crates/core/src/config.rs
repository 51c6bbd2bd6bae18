//! Application configuration and on-disk layout.
//!
//! - `AppConfig`: serializable settings, stored at `.moviehub/config.json`.
//! - `AppLayout`: computed paths for the data directory; performs no IO.
//! - `load_app_config` / `open_storage`: load the config and open the
//!   storage database it points at.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_OMDB_BASE_URL;
use crate::favorites::FAVORITES_KEY;
use crate::storage::SqliteStorage;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Remote catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// May be left empty in the file and supplied through `OMDB_API_KEY`.
    #[serde(default)]
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_OMDB_BASE_URL.to_string(), api_key: String::new() }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the storage database (typically relative to the root).
    pub path: String,
    /// Slot that holds the favorites array.
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

fn default_favorites_key() -> String {
    FAVORITES_KEY.to_string()
}

impl StorageConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), favorites_key: default_favorites_key() }
    }
}

/// Serializable configuration describing a MovieHub data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Human-friendly name for this data directory.
    pub name: String,
    /// Config format version.
    pub config_version: String,
    #[serde(default)]
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Create a configuration with default API settings and the given storage path.
    pub fn new(name: impl Into<String>, storage_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config_version: "0.1.0".to_string(),
            api: ApiConfig::default(),
            storage: StorageConfig::new(storage_path),
        }
    }

    /// The API key to use: `OMDB_API_KEY` when set and non-empty, else the file's value.
    pub fn effective_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| Some(self.api.api_key.clone()).filter(|k| !k.trim().is_empty()))
    }
}

/// Logical layout of a data directory on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO itself.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Root directory.
    pub root: PathBuf,
    /// Directory for internal metadata (.moviehub).
    pub meta_dir: PathBuf,
    /// Path to the config file (JSON).
    pub config_path: PathBuf,
    /// Path to the storage database.
    pub storage_path: PathBuf,
}

impl AppLayout {
    /// Compute the default layout rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(".moviehub");
        let config_path = meta_dir.join("config.json");
        let storage_path = meta_dir.join("storage.db");

        Self { root, meta_dir, config_path, storage_path }
    }

    /// Storage path suitable for `AppConfig`, relative to `root` when possible.
    pub fn storage_path_relative_string(&self) -> String {
        match self.storage_path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => self.storage_path.to_string_lossy().to_string(),
        }
    }

    /// Resolve a configured storage path (relative or absolute) against `root`.
    pub fn resolve_storage_path(&self, config: &AppConfig) -> PathBuf {
        let configured = Path::new(&config.storage.path);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.root.join(configured)
        }
    }
}

/// Load the config JSON from disk for a given layout.
pub fn load_app_config(layout: &AppLayout) -> Result<AppConfig> {
    let config_json = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read config at {}", layout.config_path.display())
    })?;
    let config: AppConfig =
        serde_json::from_str(&config_json).context("Failed to parse config JSON")?;
    Ok(config)
}

/// Load the config and open the storage database it points at.
pub fn open_storage(layout: &AppLayout) -> Result<(AppConfig, PathBuf, SqliteStorage)> {
    let config = load_app_config(layout)?;
    let storage_path = layout.resolve_storage_path(&config);
    let storage = SqliteStorage::open(&storage_path).with_context(|| {
        format!("Failed to open storage database at {}", storage_path.display())
    })?;
    Ok((config, storage_path, storage))
}
