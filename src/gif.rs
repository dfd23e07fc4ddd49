//! GIF search against Giphy (primary, needs a key) with Tenor as fallback.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::error::GatewayError;
use crate::metrics::GIF_FALLBACKS;
use crate::models::{GifItem, GifSource, SearchOutcome};

pub const GIPHY_BASE_URL: &str = "https://api.giphy.com";
pub const TENOR_BASE_URL: &str = "https://tenor.googleapis.com";

pub const MAX_RESULTS: usize = 6;

const DEFAULT_TITLE: &str = "GIF";

#[derive(Debug, Clone)]
pub struct GifSearchConfig {
    pub giphy_api_key: Option<String>,
    pub tenor_api_key: Option<String>,
    pub giphy_base_url: String,
    pub tenor_base_url: String,
    pub timeout: Duration,
}

pub struct GifSearchClient {
    client: Client,
    giphy_api_key: Option<String>,
    tenor_api_key: Option<String>,
    giphy_base_url: String,
    tenor_base_url: String,
}

// Why one provider attempt did not produce results
#[derive(Debug, Error)]
enum ProviderFailure {
    #[error("upstream returned {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Request(reqwest::Error),
}

// Giphy and Tenor both take their key in the query string
impl From<reqwest::Error> for ProviderFailure {
    fn from(e: reqwest::Error) -> Self {
        ProviderFailure::Request(e.without_url())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn title_or_default(title: Option<String>) -> String {
    match title {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_TITLE.to_string(),
    }
}

impl GifSearchClient {
    pub fn new(config: GifSearchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            giphy_api_key: non_empty(config.giphy_api_key),
            tenor_api_key: non_empty(config.tenor_api_key),
            giphy_base_url: config.giphy_base_url.trim_end_matches('/').to_string(),
            tenor_base_url: config.tenor_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn has_primary(&self) -> bool {
        self.giphy_api_key.is_some()
    }

    /// Search Giphy if configured, otherwise or on any failure Tenor.
    ///
    /// The query is passed through untouched, an empty one included.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, GatewayError> {
        if let Some(key) = &self.giphy_api_key {
            match self.search_giphy(key, query).await {
                Ok(gifs) => return Ok(SearchOutcome::success(query, gifs)),
                Err(e) => {
                    GIF_FALLBACKS.inc();
                    tracing::warn!(
                        error = %e,
                        query = %query,
                        "Giphy search failed, falling back to Tenor"
                    );
                }
            }
        }

        match self.search_tenor(query).await {
            Ok(gifs) => Ok(SearchOutcome::success(query, gifs)),
            Err(ProviderFailure::Status(status)) => {
                tracing::error!(%status, query = %query, "Tenor search failed");
                Err(GatewayError::GifSearchFailed("Failed to fetch GIFs".to_string()))
            }
            Err(ProviderFailure::Request(e)) => {
                tracing::error!(error = %e, query = %query, "Tenor search failed");
                Err(GatewayError::GifSearchFailed(e.to_string()))
            }
        }
    }

    async fn search_giphy(
        &self,
        key: &str,
        query: &str,
    ) -> Result<Vec<GifItem>, ProviderFailure> {
        let limit = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(format!("{}/v1/gifs/search", self.giphy_base_url))
            .query(&[
                ("api_key", key),
                ("q", query),
                ("limit", limit.as_str()),
                ("rating", "g"),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ProviderFailure::Status(response.status()));
        }

        let body: GiphyResponse = response.json().await?;
        Ok(body
            .data
            .into_iter()
            .take(MAX_RESULTS)
            .map(|item| GifItem {
                url: item.images.fixed_height.url,
                title: title_or_default(item.title),
                source: GifSource::Giphy,
            })
            .collect())
    }

    async fn search_tenor(&self, query: &str) -> Result<Vec<GifItem>, ProviderFailure> {
        let limit = MAX_RESULTS.to_string();
        let mut request = self
            .client
            .get(format!("{}/v2/search", self.tenor_base_url))
            .query(&[("q", query), ("limit", limit.as_str())]);
        if let Some(key) = &self.tenor_api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?;
        if response.status() != StatusCode::OK {
            return Err(ProviderFailure::Status(response.status()));
        }

        let body: TenorResponse = response.json().await?;
        Ok(body
            .results
            .into_iter()
            .take(MAX_RESULTS)
            .map(|item| GifItem {
                url: item.media_formats.gif.url,
                title: title_or_default(item.content_description),
                source: GifSource::Tenor,
            })
            .collect())
    }
}

#[derive(Deserialize)]
struct GiphyResponse {
    #[serde(default)]
    data: Vec<GiphyItem>,
}

#[derive(Deserialize)]
struct GiphyItem {
    title: Option<String>,
    images: GiphyImages,
}

#[derive(Deserialize)]
struct GiphyImages {
    fixed_height: MediaUrl,
}

#[derive(Deserialize)]
struct TenorResponse {
    #[serde(default)]
    results: Vec<TenorItem>,
}

#[derive(Deserialize)]
struct TenorItem {
    content_description: Option<String>,
    media_formats: TenorFormats,
}

#[derive(Deserialize)]
struct TenorFormats {
    gif: MediaUrl,
}

#[derive(Deserialize)]
struct MediaUrl {
    url: String,
}
