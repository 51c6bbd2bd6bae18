use serde::{Deserialize, Serialize};

use crate::catalog::{MovieDetail, MovieSummary};

/// Kind recorded when the source did not say.
pub const DEFAULT_FAVORITE_KIND: &str = "movie";

/// A saved reference to a movie or show.
///
/// Identity is `id`: two items with the same id are the same favorite
/// regardless of the other fields. Serialized with the remote API's field
/// names so stored data stays compatible with older builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster_url: String,
    #[serde(rename = "Type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    DEFAULT_FAVORITE_KIND.to_string()
}

impl FavoriteItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster_url: String::new(),
            kind: default_kind(),
        }
    }

    pub fn with_poster(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = poster_url.into();
        self
    }

    /// Blank kinds fall back to `movie`.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        self.kind = if kind.trim().is_empty() { default_kind() } else { kind };
        self
    }
}

impl From<&MovieSummary> for FavoriteItem {
    fn from(movie: &MovieSummary) -> Self {
        FavoriteItem::new(&movie.id, &movie.title, &movie.year)
            .with_poster(&movie.poster_url)
            .with_kind(&movie.kind)
    }
}

impl From<&MovieDetail> for FavoriteItem {
    fn from(detail: &MovieDetail) -> Self {
        FavoriteItem::from(&detail.summary)
    }
}
