use anyhow::{anyhow, Context, Result};
use moviehub_core::catalog::OmdbClient;
use moviehub_core::config::{open_storage, AppConfig, AppLayout, API_KEY_ENV};
use moviehub_core::favorites::{FavoriteItem, FavoritesStore};
use moviehub_core::storage::SqliteStorage;

use crate::canonicalize_or_current;

/// Resolve `root` and compute its layout.
pub fn layout_for(root: &str) -> Result<AppLayout> {
    let root_path = canonicalize_or_current(root)?;
    Ok(AppLayout::new(root_path))
}

/// Load config and the favorites store for an initialized root.
pub fn open_favorites(
    layout: &AppLayout,
) -> Result<(AppConfig, FavoritesStore<SqliteStorage>)> {
    let (config, _storage_path, storage) = open_storage(layout)?;
    let store = FavoritesStore::load_with_key(storage, config.storage.favorites_key.clone())
        .context("Failed to load favorites")?;
    Ok((config, store))
}

/// Build a catalog client from config; requires an API key.
pub fn catalog_client(layout: &AppLayout, config: &AppConfig) -> Result<OmdbClient> {
    let api_key = config.effective_api_key().ok_or_else(|| {
        anyhow!(
            "No API key configured; set {} or api.api_key in {}",
            API_KEY_ENV,
            layout.config_path.display()
        )
    })?;
    Ok(OmdbClient::new(&config.api.base_url, api_key)?)
}

/// `Title (Year) [id] kind` line used by listings.
pub fn format_favorite(item: &FavoriteItem) -> String {
    format!("{} ({}) [{}] {}", item.title, item.year, item.id, item.kind)
}
