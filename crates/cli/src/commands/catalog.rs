use anyhow::{Context, Result};
use moviehub_core::catalog::{MediaKind, MovieCatalog, MovieDetail, SearchPage, SearchRequest};
use moviehub_core::favorites::FavoriteItem;

use crate::commands::{catalog_client, format_favorite, layout_for, open_favorites};

/// Search the remote catalog and print one page of results.
pub fn search_command(
    root: &str,
    query: &str,
    kind: MediaKind,
    year: Option<String>,
    page: u32,
    json: bool,
) -> Result<()> {
    let layout = layout_for(root)?;
    let (config, store) = open_favorites(&layout)?;
    let client = catalog_client(&layout, &config)?;

    let request = SearchRequest::new(query).with_kind(kind).with_year(year).with_page(page);
    let results = client.search(&request).context("Search failed")?;

    if json {
        let serialized = serde_json::to_string_pretty(&results)
            .context("Failed to serialize search results to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    print!("{}", render_search_page(query, &results, |id| store.is_favorite(id)));
    Ok(())
}

/// Text rendering of a result page; `is_favorite` marks saved titles with `*`.
pub fn render_search_page(
    query: &str,
    results: &SearchPage,
    is_favorite: impl Fn(&str) -> bool,
) -> String {
    let mut out = String::new();
    if results.results.is_empty() {
        out.push_str(&format!("No results for \"{}\"\n", query));
        return out;
    }

    out.push_str(&format!(
        "Found {} results for \"{}\" (page {} of {})\n",
        results.total_results,
        query,
        results.page,
        results.total_pages()
    ));
    for movie in &results.results {
        let marker = if is_favorite(&movie.id) { "*" } else { " " };
        out.push_str(&format!(
            "{} {} ({}) [{}] {}\n",
            marker, movie.title, movie.year, movie.id, movie.kind
        ));
    }
    out
}

/// Show full details for one title, optionally toggling it as a favorite.
pub fn movie_command(root: &str, id: &str, json: bool, toggle_favorite: bool) -> Result<()> {
    let layout = layout_for(root)?;
    let (config, mut store) = open_favorites(&layout)?;
    let client = catalog_client(&layout, &config)?;

    let detail = client.details(id).with_context(|| format!("Failed to load movie {}", id))?;

    if toggle_favorite {
        let item = FavoriteItem::from(&detail);
        let line = format_favorite(&item);
        let added = !store.is_favorite(&item.id);
        store.toggle(item).context("Failed to toggle favorite")?;
        if !json {
            println!("{} favorite: {}", if added { "Added" } else { "Removed" }, line);
        }
    }

    if json {
        let serialized =
            serde_json::to_string_pretty(&detail).context("Failed to serialize movie to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    print!("{}", render_movie_detail(&detail, store.is_favorite(&detail.summary.id)));
    Ok(())
}

/// Text rendering of a detail record.
pub fn render_movie_detail(detail: &MovieDetail, is_favorite: bool) -> String {
    let mut out = String::new();
    let summary = &detail.summary;
    out.push_str(&format!("{} ({})\n", summary.title, summary.year));
    let heading_width = summary.title.chars().count() + summary.year.chars().count() + 3;
    out.push_str(&format!("{}\n", "=".repeat(heading_width)));

    let rows = [
        ("Id", summary.id.as_str()),
        ("Type", summary.kind.as_str()),
        ("Rated", detail.rated.as_str()),
        ("Released", detail.released.as_str()),
        ("Runtime", detail.runtime.as_str()),
        ("Genre", detail.genre.as_str()),
        ("Director", detail.director.as_str()),
        ("Writer", detail.writer.as_str()),
        ("Actors", detail.actors.as_str()),
        ("Language", detail.language.as_str()),
        ("Country", detail.country.as_str()),
        ("Awards", detail.awards.as_str()),
        ("IMDb rating", detail.imdb_rating.as_str()),
        ("IMDb votes", detail.imdb_votes.as_str()),
        ("Box office", detail.box_office.as_deref().unwrap_or("")),
    ];
    for (label, value) in rows {
        if !value.is_empty() && value != "N/A" {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }
    if !detail.plot.is_empty() {
        out.push_str(&format!("\n{}\n", detail.plot));
    }
    out.push_str(&format!("\nFavorite: {}\n", if is_favorite { "yes" } else { "no" }));
    out
}
