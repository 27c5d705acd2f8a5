//! TMDB title search client.

use reqwest::Url;

use super::client::http_client;
use super::types::{TmdbSearchResponse, TmdbSeries};
use super::{OriginalLanguageSource, ProviderKind};
use crate::config::ProviderConfig;
use crate::error::{FilterError, Result};
use crate::identifier::LookupKey;

/// Searches TMDB series by title with an API read access token.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl TmdbClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        if config.kind != ProviderKind::Tmdb {
            return Err(FilterError::Config(format!(
                "{} is not a title search provider",
                config.kind
            )));
        }
        let http = http_client(config)?;

        Ok(Self {
            base_url: config.normalized_url().to_string(),
            token: config.api_key.clone(),
            http,
        })
    }

    /// Search URL for a title.
    pub fn search_url(&self, title: &str) -> Result<Url> {
        let endpoint = format!("{}{}", self.base_url, ProviderKind::Tmdb.lookup_path());
        Url::parse_with_params(&endpoint, &[("query", title)])
            .map_err(|e| FilterError::Config(format!("Invalid TMDB URL '{}': {}", endpoint, e)))
    }

    /// First search hit for `title`.
    pub async fn search(&self, title: &str) -> Result<TmdbSeries> {
        let key = LookupKey::Title(title.to_string()).to_string();
        let url = self.search_url(title)?;
        tracing::info!("Fetching series language for: {}", title);

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                FilterError::media_not_found(
                    key.clone(),
                    format!("error while sending request to '{}': {}", url.path(), e),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilterError::media_not_found(
                key,
                format!("failed to fetch series data from '{}': {}", url.path(), status),
            ));
        }

        let body: TmdbSearchResponse = response.json().await.map_err(|e| {
            FilterError::media_not_found(key.clone(), format!("invalid search response: {}", e))
        })?;

        body.results
            .into_iter()
            .next()
            .ok_or_else(|| FilterError::media_not_found(key, "Series not found in TMDB"))
    }
}

impl OriginalLanguageSource for TmdbClient {
    fn source_name(&self) -> String {
        ProviderKind::Tmdb.to_string()
    }

    fn lookup_key(&self, path: &str, title: Option<&str>) -> Result<LookupKey> {
        title.map(|t| LookupKey::Title(t.to_string())).ok_or_else(|| {
            tracing::error!("No series name found in metadata of {}", path);
            FilterError::TitleNotFound {
                path: path.to_string(),
            }
        })
    }

    async fn original_language(&self, key: &LookupKey) -> Result<String> {
        let LookupKey::Title(title) = key else {
            return Err(FilterError::Config(format!(
                "TMDB searches titles, not {}",
                key
            )));
        };
        let series = self.search(title).await?;
        tracing::debug!(
            "Fetched series data from TMDB: {:?} (id {:?})",
            series.name,
            series.id
        );

        let code = series.original_language_code().ok_or_else(|| {
            FilterError::media_not_found(
                key.to_string(),
                format!(
                    "Series '{}' has no original language",
                    series.name.as_deref().unwrap_or("?")
                ),
            )
        })?;
        tracing::info!("Native language for series returned: {}", code);
        Ok(code.to_string())
    }
}
