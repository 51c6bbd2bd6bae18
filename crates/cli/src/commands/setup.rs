use std::fs;

use anyhow::{Context, Result};
use moviehub_core::config::{load_app_config, AppConfig};
use moviehub_core::storage::SqliteStorage;
use serde::Serialize;

use crate::commands::{layout_for, open_favorites};
use crate::infer_app_name;

#[derive(Serialize)]
pub struct ConfigInfoSnapshot {
    pub name: String,
    pub root: String,
    pub config_file: String,
    pub config_version: String,
    pub api_base_url: String,
    pub api_key_configured: bool,
    pub storage_path: String,
    pub favorites_key: String,
    pub favorites_count: usize,
}

/// Initialize a data directory at `root`.
///
/// An existing config is left untouched so a configured API key survives re-runs.
pub fn init_command(root: &str, name: Option<String>, api_key: Option<String>) -> Result<()> {
    let layout = layout_for(root)?;

    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;

    if layout.config_path.exists() {
        let config = load_app_config(&layout)?;
        println!("MovieHub already initialized:");
        println!("  Name: {}", config.name);
        println!("  Config: {}", layout.config_path.display());
        return Ok(());
    }

    let app_name = name.unwrap_or_else(|| infer_app_name(&layout.root));
    let mut config = AppConfig::new(&app_name, layout.storage_path_relative_string());
    if let Some(key) = api_key {
        config.api.api_key = key;
    }

    let json = serde_json::to_string_pretty(&config)?;
    fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write config: {}", layout.config_path.display())
    })?;

    // Create the storage database immediately so follow-on commands (and tests)
    // can rely on its presence.
    SqliteStorage::open(&layout.storage_path).with_context(|| {
        format!("Failed to initialize storage database at {}", layout.storage_path.display())
    })?;

    println!("Initialized MovieHub:");
    println!("  Name: {}", app_name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!("  Storage (relative): {}", config.storage.path);

    Ok(())
}

/// Show the configuration of an initialized root.
pub fn config_info_command(root: &str, json: bool) -> Result<()> {
    let layout = layout_for(root)?;
    let (config, store) = open_favorites(&layout)?;

    let snapshot = ConfigInfoSnapshot {
        name: config.name.clone(),
        root: layout.root.display().to_string(),
        config_file: layout.config_path.display().to_string(),
        config_version: config.config_version.clone(),
        api_base_url: config.api.base_url.clone(),
        api_key_configured: config.effective_api_key().is_some(),
        storage_path: layout.resolve_storage_path(&config).display().to_string(),
        favorites_key: config.storage.favorites_key.clone(),
        favorites_count: store.len(),
    };

    if json {
        let serialized = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize config info to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("MovieHub Config");
    println!("===============");
    println!("Name: {}", snapshot.name);
    println!("Root: {}", snapshot.root);
    println!("Config file: {}", snapshot.config_file);
    println!("Config version: {}", snapshot.config_version);
    println!("API base URL: {}", snapshot.api_base_url);
    println!("API key: {}", if snapshot.api_key_configured { "configured" } else { "MISSING" });
    println!("Storage: {}", snapshot.storage_path);
    println!("Favorites key: {}", snapshot.favorites_key);
    println!("Favorites: {}", snapshot.favorites_count);

    Ok(())
}
