use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use super::FavoriteItem;
use crate::observe::{Subscribers, Subscription};
use crate::storage::{KeyValueStorage, StorageError};

/// Storage slot holding the favorites array.
pub const FAVORITES_KEY: &str = "moviehub_favorites";

/// Error type for favorites mutations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    /// Favorites are keyed by id; an empty id cannot be stored.
    #[error("Favorite id must not be empty")]
    EmptyId,

    /// Serializing the collection failed.
    #[error("Failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),

    /// The storage backend failed. After a failed write the in-memory
    /// collection is left unchanged.
    #[error("Failed to persist favorites: {0}")]
    Storage(#[from] StorageError),
}

/// Convenience result type for favorites operations.
pub type FavoritesResult<T> = Result<T, FavoritesError>;

/// Read the collection stored under `key`.
///
/// A missing slot or malformed data yields an empty collection (logged, never
/// returned as an error). A backend that cannot be read is an error: starting
/// empty would let the next write replace the saved collection. Items with an
/// empty id and duplicate ids are dropped, keeping the first occurrence.
pub fn load_favorites<S: KeyValueStorage + ?Sized>(
    storage: &S,
    key: &str,
) -> FavoritesResult<Vec<FavoriteItem>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(Vec::new());
    };

    let items: Vec<FavoriteItem> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(key, error = %err, "failed to parse favorites; starting empty");
            return Ok(Vec::new());
        }
    };

    let mut seen = HashSet::new();
    let before = items.len();
    let items: Vec<FavoriteItem> = items
        .into_iter()
        .filter(|item| !item.id.is_empty() && seen.insert(item.id.clone()))
        .collect();
    if items.len() < before {
        warn!(
            key,
            dropped = before - items.len(),
            "dropped favorites with empty or duplicate ids on load"
        );
    }
    Ok(items)
}

/// Serialize `items` and write them to `key`, replacing any prior value.
pub fn persist_favorites<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    key: &str,
    items: &[FavoriteItem],
) -> FavoritesResult<()> {
    let json = serde_json::to_string(items)?;
    storage.set(key, &json)?;
    Ok(())
}

/// The favorites collection and its durable mirror.
///
/// Every mutation writes the new collection to storage first and only then
/// replaces the in-memory list, so after a successful call both are equal.
/// A failed write leaves memory untouched and is returned to the caller.
pub struct FavoritesStore<S> {
    storage: S,
    key: String,
    items: Vec<FavoriteItem>,
    listeners: Subscribers<Vec<FavoriteItem>>,
}

impl<S> std::fmt::Debug for FavoritesStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("items", &self.items.len())
            .finish()
    }
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Load from the default slot.
    pub fn load(storage: S) -> FavoritesResult<Self> {
        Self::load_with_key(storage, FAVORITES_KEY)
    }

    /// Load from a custom slot.
    ///
    /// Fails only when the backend cannot be read.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> FavoritesResult<Self> {
        let key = key.into();
        let items = load_favorites(&storage, &key)?;
        debug!(key = %key, count = items.len(), "loaded favorites");
        Ok(Self { storage, key, items, listeners: Subscribers::new() })
    }

    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteItem> {
        self.items.iter().find(|fav| fav.id == id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.items.iter().any(|fav| fav.id == id)
    }

    /// Remove `item` if its id is saved, otherwise append it.
    pub fn toggle(&mut self, item: FavoriteItem) -> FavoritesResult<&[FavoriteItem]> {
        if self.is_favorite(&item.id) {
            self.remove(&item.id)?;
        } else {
            self.add(item)?;
        }
        Ok(&self.items)
    }

    /// Append `item` unless its id is already saved. Returns whether it was added.
    pub fn add(&mut self, item: FavoriteItem) -> FavoritesResult<bool> {
        if item.id.is_empty() {
            return Err(FavoritesError::EmptyId);
        }
        if self.is_favorite(&item.id) {
            return Ok(false);
        }

        let mut updated = self.items.clone();
        debug!(id = %item.id, "adding favorite");
        updated.push(item);
        self.commit(updated)?;
        Ok(true)
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> FavoritesResult<bool> {
        if !self.is_favorite(id) {
            return Ok(false);
        }

        let updated: Vec<FavoriteItem> =
            self.items.iter().filter(|fav| fav.id != id).cloned().collect();
        debug!(id, "removing favorite");
        self.commit(updated)?;
        Ok(true)
    }

    /// Write `items` to this store's slot without touching memory.
    pub fn persist(&mut self, items: &[FavoriteItem]) -> FavoritesResult<()> {
        persist_favorites(&mut self.storage, &self.key, items)
    }

    /// Register for collection changes. The handler receives the new collection.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&Vec<FavoriteItem>) + 'static,
    {
        self.listeners.subscribe(handler)
    }

    /// Give back the storage backend, ending the store's lifecycle.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, updated: Vec<FavoriteItem>) -> FavoritesResult<()> {
        self.persist(&updated)?;
        self.items = updated;
        self.listeners.notify(&self.items);
        Ok(())
    }
}
