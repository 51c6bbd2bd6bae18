use std::io::Cursor;

use moviehub::app::{app_routes, describe_match, Page};
use moviehub::commands::{
    init_command, render_movie_detail, render_search_page, resolve_route, run_shell,
    toggle_favorite_command,
};
use moviehub_core::catalog::{MovieDetail, MovieSummary, SearchPage};
use moviehub_core::favorites::FavoriteItem;
use moviehub_core::routing::resolve;
use tempfile::tempdir;

fn summary(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        poster_url: "N/A".to_string(),
        kind: "movie".to_string(),
    }
}

#[test]
fn app_route_table_matches_each_page() {
    let routes = app_routes().expect("routes");
    assert_eq!(routes.len(), 4);

    let cases = [
        ("/", Page::Home),
        ("/search", Page::Search),
        ("/movie/tt0111161", Page::MovieDetail),
        ("/favorites", Page::Favorites),
    ];
    for (path, page) in cases {
        let matched = resolve(path, &routes).expect("should match");
        assert_eq!(*matched.view(), page, "path {path}");
    }
}

#[test]
fn resolve_route_reports_view_and_params() {
    let resolution = resolve_route("/movie/tt5").expect("resolve");
    assert_eq!(resolution.view, Some(Page::MovieDetail));
    assert_eq!(resolution.params.get("id").map(String::as_str), Some("tt5"));

    let missing = resolve_route("/movies-archive").expect("resolve");
    assert_eq!(missing.view, None);
    assert!(missing.params.is_empty());
}

#[test]
fn describe_match_formats_params() {
    let routes = app_routes().expect("routes");
    let detail = resolve("/movie/tt9", &routes);
    assert_eq!(describe_match(detail.as_ref()), "movie-detail id=tt9");
    let home = resolve("/", &routes);
    assert_eq!(describe_match(home.as_ref()), "home");
    assert_eq!(describe_match(None), "no route");
}

#[test]
fn search_page_rendering_marks_favorites() {
    let page = SearchPage {
        results: vec![summary("tt1", "Inception"), summary("tt2", "Interstellar")],
        total_results: 12,
        page: 1,
    };
    let text = render_search_page("inter", &page, |id| id == "tt2");
    assert!(text.contains("Found 12 results for \"inter\" (page 1 of 2)"));
    assert!(text.contains("  Inception (2010) [tt1] movie"));
    assert!(text.contains("* Interstellar (2010) [tt2] movie"));

    let empty = SearchPage { results: vec![], total_results: 0, page: 1 };
    assert_eq!(render_search_page("zzz", &empty, |_| false), "No results for \"zzz\"\n");
}

#[test]
fn movie_detail_rendering_skips_empty_fields() {
    let detail = MovieDetail {
        summary: summary("tt1375666", "Inception"),
        rated: "PG-13".to_string(),
        released: String::new(),
        runtime: "148 min".to_string(),
        genre: "Sci-Fi".to_string(),
        director: "Christopher Nolan".to_string(),
        writer: String::new(),
        actors: String::new(),
        plot: "A thief steals secrets through dreams.".to_string(),
        language: String::new(),
        country: String::new(),
        awards: "N/A".to_string(),
        imdb_rating: "8.8".to_string(),
        imdb_votes: String::new(),
        box_office: None,
    };
    let text = render_movie_detail(&detail, true);
    assert!(text.starts_with("Inception (2010)\n"));
    assert!(text.contains("Director: Christopher Nolan"));
    assert!(!text.contains("Awards"));
    assert!(!text.contains("Released"));
    assert!(text.contains("A thief steals secrets through dreams."));
    assert!(text.ends_with("Favorite: yes\n"));
}

#[test]
fn movie_detail_heading_is_underlined_per_character() {
    let detail = MovieDetail {
        summary: summary("tt0211915", "Amélie"),
        rated: String::new(),
        released: String::new(),
        runtime: String::new(),
        genre: String::new(),
        director: String::new(),
        writer: String::new(),
        actors: String::new(),
        plot: String::new(),
        language: String::new(),
        country: String::new(),
        awards: String::new(),
        imdb_rating: String::new(),
        imdb_votes: String::new(),
        box_office: None,
    };
    let text = render_movie_detail(&detail, false);
    let mut lines = text.lines();
    let heading = lines.next().expect("heading");
    let underline = lines.next().expect("underline");
    assert_eq!(heading, "Amélie (2010)");
    assert_eq!(underline, "=".repeat(heading.chars().count()));
}

#[test]
fn shell_navigates_and_reports_changes() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().to_str().expect("utf8 path");
    init_command(root, Some("ShellTest".to_string()), None).expect("init");
    toggle_favorite_command(root, FavoriteItem::new("tt1", "X", "2020")).expect("toggle");

    let input = Cursor::new(
        "go /search\nopen tt5\nwhere\nback\nback\nback\nforward\ngo nowhere\ngo /nope\nfavorites\nquit\n",
    );
    let mut output = Vec::new();
    run_shell(root, "/", input, &mut output).expect("shell");
    let text = String::from_utf8(output).expect("utf8");

    let expected = [
        "at /",
        "-> /search [search]",
        "-> /movie/tt5 [movie-detail id=tt5]",
        "at /movie/tt5 [movie-detail id=tt5]",
        "-> /search [search]",
        "-> / [home]",
        "no previous page",
        "-> /search [search]",
        "error: Invalid navigation path (must start with '/'): nowhere",
        "-> /nope [no route]",
        "favorites (1):",
        "  - X (2020) [tt1] movie",
        "bye from /nope",
    ];
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, expected);
}
