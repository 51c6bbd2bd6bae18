//! Remote movie catalog.
//!
//! The application only consumes two calls from the remote movie database:
//! paged search and detail lookup by id. `MovieCatalog` is that seam;
//! `OmdbClient` implements it against the OMDb HTTP API. Callers own retry and
//! caching policy; nothing here retries.

mod omdb;

pub use omdb::*;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Results per page returned by the remote search.
pub const RESULTS_PER_PAGE: u32 = 10;

/// Error type for catalog calls.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Search with an empty or whitespace-only query is never sent.
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// Non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The API answered but reported a logical failure (`"Response": "False"`).
    #[error("{0}")]
    Api(String),

    /// The body was not the JSON we expected.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport failure (DNS, TLS, connection reset, ...).
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configured base URL could not be parsed.
    #[error("Invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Convenience result type for catalog calls.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Kind filter for search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    All,
    Movie,
    Series,
    Episode,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::All => "all",
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
            MediaKind::Episode => "episode",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(MediaKind::All),
            "movie" => Ok(MediaKind::Movie),
            "series" => Ok(MediaKind::Series),
            "episode" => Ok(MediaKind::Episode),
            other => Err(format!(
                "Invalid media type '{}'. Allowed: all, movie, series, episode",
                other
            )),
        }
    }
}

/// One search hit, as the remote API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster_url: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
}

/// Full record for a single title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(rename = "Rated", default)]
    pub rated: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Writer", default)]
    pub writer: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Language", default)]
    pub language: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Awards", default)]
    pub awards: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "BoxOffice", default, skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
}

/// One page of search results plus the total hit count across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub results: Vec<MovieSummary>,
    pub total_results: u32,
    pub page: u32,
}

impl SearchPage {
    pub fn total_pages(&self) -> u32 {
        crate::search::total_pages(self.total_results, RESULTS_PER_PAGE)
    }
}

/// Parameters of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub kind: MediaKind,
    pub year: Option<String>,
    pub page: u32,
}

impl SearchRequest {
    /// First page, any kind, any year.
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), kind: MediaKind::All, year: None, page: 1 }
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kind = kind;
        self
    }

    /// Blank years are treated as "no filter".
    pub fn with_year(mut self, year: Option<String>) -> Self {
        self.year = year.filter(|y| !y.trim().is_empty());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }
}

/// The remote movie database as the application sees it.
pub trait MovieCatalog {
    fn search(&self, request: &SearchRequest) -> CatalogResult<SearchPage>;

    fn details(&self, id: &str) -> CatalogResult<MovieDetail>;
}
