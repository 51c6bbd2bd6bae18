//! The application's views and route table.

use std::fmt;

use moviehub_core::routing::{PatternError, Route, RouteMatch};
use serde::Serialize;

/// Views the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    Search,
    MovieDetail,
    Favorites,
}

impl Page {
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Search => "search",
            Page::MovieDetail => "movie-detail",
            Page::Favorites => "favorites",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pattern of the movie detail route.
pub const MOVIE_DETAIL_PATTERN: &str = "/movie/:id";

/// The application's routes, in declaration order.
pub fn app_routes() -> Result<Vec<Route<Page>>, PatternError> {
    [
        ("/", Page::Home),
        ("/search", Page::Search),
        (MOVIE_DETAIL_PATTERN, Page::MovieDetail),
        ("/favorites", Page::Favorites),
    ]
    .into_iter()
    .map(|(pattern, page)| Route::new(pattern, page))
    .collect()
}

/// One-line description of a resolution, e.g. `movie-detail id=tt5`.
pub fn describe_match(matched: Option<&RouteMatch<'_, Page>>) -> String {
    match matched {
        None => "no route".to_string(),
        Some(m) if m.params.is_empty() => m.view().to_string(),
        Some(m) => {
            let params: Vec<String> = m.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("{} {}", m.view(), params.join(" "))
        }
    }
}
