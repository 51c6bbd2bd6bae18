use moviehub_core::favorites::{FavoriteItem, FavoritesStore, FAVORITES_KEY};
use moviehub_core::storage::{
    KeyValueStorage, SqliteStorage, StorageError, CURRENT_SCHEMA_VERSION,
};
use rusqlite::Connection;
use tempfile::tempdir;

#[test]
fn get_set_remove_round_trip() {
    let mut storage = SqliteStorage::open_in_memory().expect("open");
    assert_eq!(storage.get("slot").expect("get"), None);

    storage.set("slot", "one").expect("set");
    storage.set("slot", "two").expect("overwrite");
    assert_eq!(storage.get("slot").expect("get").as_deref(), Some("two"));

    storage.set("another", "x").expect("set");
    assert_eq!(storage.keys().expect("keys"), vec!["another".to_string(), "slot".to_string()]);

    storage.remove("slot").expect("remove");
    assert_eq!(storage.get("slot").expect("get"), None);
}

#[test]
fn values_survive_reopen() {
    let tmp = tempdir().expect("temp dir");
    let path = tmp.path().join("storage.db");

    {
        let mut storage = SqliteStorage::open(&path).expect("open");
        storage.set("k", "persisted").expect("set");
    }

    let storage = SqliteStorage::open(&path).expect("reopen");
    assert_eq!(storage.get("k").expect("get").as_deref(), Some("persisted"));

    let version: i32 = storage
        .connection()
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("user_version");
    assert_eq!(version, CURRENT_SCHEMA_VERSION);
}

#[test]
fn favorites_persist_across_sessions() {
    let tmp = tempdir().expect("temp dir");
    let path = tmp.path().join("storage.db");

    {
        let storage = SqliteStorage::open(&path).expect("open");
        let mut store = FavoritesStore::load(storage).expect("load");
        store
            .toggle(FavoriteItem::new("tt0111161", "The Shawshank Redemption", "1994"))
            .expect("toggle");
        store.toggle(FavoriteItem::new("tt1375666", "Inception", "2010")).expect("toggle");
    }

    let store =
        FavoritesStore::load(SqliteStorage::open(&path).expect("reopen")).expect("load");
    let ids: Vec<&str> = store.items().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["tt0111161", "tt1375666"]);
    assert!(store.is_favorite("tt1375666"));
    assert_eq!(store.key(), FAVORITES_KEY);
}

#[test]
fn open_errors_on_unsupported_schema_version() {
    let tmp = tempdir().expect("temp dir");
    let path = tmp.path().join("storage.db");

    {
        let conn = Connection::open(&path).expect("open raw sqlite db");
        conn.pragma_update(None, "user_version", 99_i32).expect("set user_version pragma");
    }

    match SqliteStorage::open(&path) {
        Err(StorageError::UnsupportedSchemaVersion { found, min_supported, max_supported }) => {
            assert_eq!(found, 99);
            assert_eq!(min_supported, 0);
            assert_eq!(max_supported, CURRENT_SCHEMA_VERSION);
        }
        Err(err) => panic!("expected UnsupportedSchemaVersion, got: {err}"),
        Ok(_) => panic!("expected UnsupportedSchemaVersion, got Ok(_)"),
    }
}
