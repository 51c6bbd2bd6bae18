//! Durable key-value slots.
//!
//! The favorites store persists through a named slot in a synchronous
//! key-value store (the browser's local storage in a web build). This module
//! defines that seam and two backends:
//! - `MemoryStorage`: process-local map, for tests and ephemeral sessions.
//! - `SqliteStorage`: a single-table SQLite database with schema versioning.

mod sqlite;

pub use sqlite::*;

use std::collections::HashMap;

use thiserror::Error;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying SQLite error.
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The database was created with a newer schema version than we support.
    #[error(
        "Unsupported schema version {found}; supported range is {min_supported}..={max_supported}"
    )]
    UnsupportedSchemaVersion { found: i32, min_supported: i32, max_supported: i32 },

    /// The backend refused the write (quota, read-only medium, ...). Custom
    /// `KeyValueStorage` backends return this for writes they cannot accept.
    #[error("Storage write rejected for key '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Convenience result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A synchronous string-to-string store.
///
/// `get` returns `None` for a key that was never written. `set` replaces the
/// whole value; there are no partial updates.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// In-memory backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to seed a slot, e.g. with data written by an older build.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
