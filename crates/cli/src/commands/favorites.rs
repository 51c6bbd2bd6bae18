use anyhow::{Context, Result};
use moviehub_core::favorites::FavoriteItem;

use crate::commands::{format_favorite, layout_for, open_favorites};

/// List saved favorites in insertion order.
pub fn list_favorites_command(root: &str, json: bool) -> Result<()> {
    let layout = layout_for(root)?;
    let (_config, store) = open_favorites(&layout)?;

    if json {
        let serialized = serde_json::to_string_pretty(store.items())
            .context("Failed to serialize favorites to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Favorites ({}):", store.len());
    if store.is_empty() {
        println!("  (none)");
        return Ok(());
    }
    for item in store.items() {
        println!("  - {}", format_favorite(item));
    }

    Ok(())
}

/// Add the item if its id is not saved, otherwise remove it.
pub fn toggle_favorite_command(root: &str, item: FavoriteItem) -> Result<()> {
    let layout = layout_for(root)?;
    let (_config, mut store) = open_favorites(&layout)?;

    let was_favorite = store.is_favorite(&item.id);
    let line = format_favorite(&item);
    let count = store.toggle(item).context("Failed to toggle favorite")?.len();

    if was_favorite {
        println!("Removed favorite: {}", line);
    } else {
        println!("Added favorite: {}", line);
    }
    println!("Favorites: {}", count);

    Ok(())
}

/// Remove the favorite with `id`, if present.
pub fn remove_favorite_command(root: &str, id: &str) -> Result<()> {
    let layout = layout_for(root)?;
    let (_config, mut store) = open_favorites(&layout)?;

    if store.remove(id).context("Failed to remove favorite")? {
        println!("Removed favorite: {}", id);
    } else {
        println!("Not a favorite: {}", id);
    }

    Ok(())
}

/// Print `true` or `false`.
pub fn is_favorite_command(root: &str, id: &str) -> Result<()> {
    let layout = layout_for(root)?;
    let (_config, store) = open_favorites(&layout)?;
    println!("{}", store.is_favorite(id));
    Ok(())
}
