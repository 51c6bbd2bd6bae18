use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{
    CatalogError, CatalogResult, MediaKind, MovieCatalog, MovieDetail, MovieSummary, SearchPage,
    SearchRequest,
};

/// Public OMDb endpoint.
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Message used when the API reports failure without saying why.
const GENERIC_API_ERROR: &str = "An error occurred";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Blocking OMDb client.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> CatalogResult<Self> {
        let http = reqwest::blocking::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url: Url::parse(base_url)?, api_key: api_key.into() })
    }

    /// URL for a search call. Fails with `EmptyQuery` for a blank query.
    pub fn search_url(&self, request: &SearchRequest) -> CatalogResult<Url> {
        if request.query.trim().is_empty() {
            return Err(CatalogError::EmptyQuery);
        }

        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("apikey", &self.api_key)
                .append_pair("s", &request.query)
                .append_pair("page", &request.page.max(1).to_string());
            if request.kind != MediaKind::All {
                pairs.append_pair("type", request.kind.as_str());
            }
            if let Some(year) = &request.year {
                pairs.append_pair("y", year);
            }
        }
        Ok(url)
    }

    /// URL for a detail lookup (always asks for the full plot).
    pub fn details_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("i", id)
            .append_pair("plot", "full");
        url
    }

    fn get(&self, url: Url) -> CatalogResult<(u16, String)> {
        debug!(path = %url.path(), "catalog request");
        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok((status, body))
    }
}

impl MovieCatalog for OmdbClient {
    fn search(&self, request: &SearchRequest) -> CatalogResult<SearchPage> {
        let url = self.search_url(request)?;
        let (status, body) = self.get(url)?;
        decode_search_page(status, &body, request.page.max(1))
    }

    fn details(&self, id: &str) -> CatalogResult<MovieDetail> {
        let (status, body) = self.get(self.details_url(id))?;
        decode_response(status, &body)
    }
}

/// Turn a raw HTTP answer into `T`.
///
/// Non-2xx statuses become `Http`; a body carrying `"Response": "False"`
/// becomes `Api` with the server's message.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> CatalogResult<T> {
    if !(200..300).contains(&status) {
        return Err(CatalogError::Http { status });
    }

    let value: Value = serde_json::from_str(body)?;
    if value.get("Response").and_then(Value::as_str) == Some("False") {
        let message = value
            .get("Error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_API_ERROR);
        return Err(CatalogError::Api(message.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

#[derive(Deserialize)]
struct RawSearchPage {
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
}

/// Decode a search answer. An unparsable `totalResults` counts as zero.
pub fn decode_search_page(status: u16, body: &str, page: u32) -> CatalogResult<SearchPage> {
    let raw: RawSearchPage = decode_response(status, body)?;
    let total_results =
        raw.total_results.as_deref().and_then(|t| t.trim().parse().ok()).unwrap_or(0);
    Ok(SearchPage { results: raw.search, total_results, page })
}
